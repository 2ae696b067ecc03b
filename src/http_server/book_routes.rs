//! Book HTTP Routes
//!
//! CRUD and search endpoints over the record store.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::task;

use super::errors::{ApiError, ApiResult};
use crate::book::Book;
use crate::search::SearchEngine;
use crate::store::{BookStore, StoreResult};

// ==================
// Shared State
// ==================

/// State shared across book handlers
#[derive(Debug)]
pub struct BooksState {
    pub store: BookStore,
    pub search: SearchEngine,
}

impl BooksState {
    pub fn new(store: BookStore, search: SearchEngine) -> Self {
        Self { store, search }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Book Routes
// ==================

/// Create book routes, mounted under `/books`
pub fn book_routes(state: Arc<BooksState>) -> Router {
    Router::new()
        .route("/", get(list_books_handler).post(create_book_handler))
        .route("/search", get(search_books_handler))
        .route(
            "/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

async fn list_books_handler(State(state): State<Arc<BooksState>>) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(state.store.list()?))
}

/// Run a store mutation on the blocking pool. Mutations flush to disk
/// synchronously while holding the write lock.
async fn with_store<T, F>(state: &Arc<BooksState>, op: F) -> ApiResult<T>
where
    F: FnOnce(&BookStore) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let state = Arc::clone(state);
    let result = task::spawn_blocking(move || op(&state.store))
        .await
        .map_err(|e| ApiError::Internal(format!("Store task failed: {}", e)))?;
    Ok(result?)
}

async fn create_book_handler(
    State(state): State<Arc<BooksState>>,
    payload: Result<Json<Book>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let Json(book) = payload?;
    let created = with_store(&state, move |store| store.create(book)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Book>> {
    Ok(Json(state.store.get(&id)?))
}

/// Full replacement. The id in the path wins over any id in the body.
async fn update_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<String>,
    payload: Result<Json<Book>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let Json(book) = payload?;
    let updated = with_store(&state, move |store| store.replace(&id, book)).await?;
    Ok(Json(updated))
}

async fn delete_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    with_store(&state, move |store| store.delete(&id)).await?;
    Ok(Json(MessageResponse {
        message: "Book deleted".to_string(),
    }))
}

async fn search_books_handler(
    State(state): State<Arc<BooksState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Query(params) = params?;
    let query = params.q.unwrap_or_default();
    Ok(Json(state.search.search(&state.store, &query).await?))
}
