//! # Search Engine
//!
//! The snapshot is split into at most `workers` equal chunks. Each chunk is
//! scanned on the blocking pool and the partial results are concatenated in
//! chunk order, so matches come back in collection order.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::task;

use super::errors::{SearchError, SearchResult};
use crate::book::Book;
use crate::store::BookStore;

/// Number of concurrent scan tasks per query
pub const DEFAULT_WORKERS: usize = 4;

#[derive(Debug, Clone)]
pub struct SearchEngine {
    workers: usize,
}

impl SearchEngine {
    /// Create an engine with the given fan-out. Zero is treated as one.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Find every book whose title or description contains `query`,
    /// ignoring case
    pub async fn search(&self, store: &BookStore, query: &str) -> SearchResult<Vec<Book>> {
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let snapshot = store.snapshot()?;
        if snapshot.is_empty() {
            return Ok(Vec::new());
        }

        let needle: Arc<str> = Arc::from(query.to_lowercase());
        let chunk_size = snapshot.len().div_ceil(self.workers);

        let tasks = snapshot.chunks(chunk_size).map(|chunk| {
            let chunk = chunk.to_vec();
            let needle = Arc::clone(&needle);
            task::spawn_blocking(move || scan(chunk, &needle))
        });

        let mut results = Vec::new();
        for partial in join_all(tasks).await {
            results.extend(partial.map_err(|e| SearchError::Worker(e.to_string()))?);
        }
        Ok(results)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

fn scan(chunk: Vec<Book>, needle: &str) -> Vec<Book> {
    chunk.into_iter().filter(|b| b.matches(needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::JsonFileStore;
    use tempfile::TempDir;

    fn book(title: &str, description: &str) -> Book {
        Book {
            title: title.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn seeded_store(temp_dir: &TempDir, books: Vec<Book>) -> BookStore {
        let backend = JsonFileStore::new(temp_dir.path().join("books.json"));
        let store = BookStore::open(Box::new(backend)).unwrap();
        for b in books {
            store.create(b).unwrap();
        }
        store
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_description_only_match() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(
            &temp_dir,
            vec![
                book("Dune", "desert planet saga"),
                book("Emma", "a comedy of manners"),
            ],
        );

        let results = SearchEngine::default().search(&store, "planet").await.unwrap();
        assert_eq!(titles(&results), vec!["Dune"]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir, vec![book("Dune", "desert planet saga")]);

        let results = SearchEngine::default().search(&store, "ocean").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(
            &temp_dir,
            vec![book("Fluent Code", "learning python the hard way")],
        );

        let results = SearchEngine::default().search(&store, "PYTHON").await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir, vec![book("Dune", "")]);

        let err = SearchEngine::default().search(&store, "").await.unwrap_err();
        assert!(matches!(err, SearchError::EmptyQuery));
    }

    #[tokio::test]
    async fn test_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = seeded_store(&temp_dir, vec![]);

        let results = SearchEngine::default().search(&store, "dune").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_results_follow_collection_order_across_chunks() {
        let temp_dir = TempDir::new().unwrap();
        let books = (0..11)
            .map(|i| book(&format!("Volume {}", i), "shared saga"))
            .collect();
        let store = seeded_store(&temp_dir, books);

        for workers in [1, 3, 4, 16] {
            let results = SearchEngine::new(workers).search(&store, "saga").await.unwrap();
            let expected: Vec<_> = (0..11).map(|i| format!("Volume {}", i)).collect();
            assert_eq!(titles(&results), expected, "workers = {}", workers);
        }
    }

    #[test]
    fn test_zero_workers_clamped() {
        assert_eq!(SearchEngine::new(0).workers(), 1);
        assert_eq!(SearchEngine::default().workers(), DEFAULT_WORKERS);
    }
}
