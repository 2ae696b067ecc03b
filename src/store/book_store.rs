//! # Book Store

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use crate::book::Book;
use crate::observability::Logger;
use crate::persistence::BookPersistence;

/// In-memory ordered collection of books, flushed to its persistence
/// backend after every mutation
#[derive(Debug)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
    persistence: Box<dyn BookPersistence>,
}

impl BookStore {
    /// Hydrate a store from its backend.
    ///
    /// When nothing has been persisted yet the empty collection is written
    /// out immediately so the file exists from startup on.
    pub fn open(persistence: Box<dyn BookPersistence>) -> StoreResult<Self> {
        let books = if persistence.exists() {
            let books = persistence.load()?;
            let count = books.len().to_string();
            Logger::info("STORE_HYDRATED", &[("books", count.as_str())]);
            books
        } else {
            persistence.save(&[])?;
            Logger::info("STORE_INITIALIZED", &[]);
            Vec::new()
        };

        Ok(Self {
            books: RwLock::new(books),
            persistence,
        })
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Flush `next` and only then make it the live collection
    fn commit(
        &self,
        books: &mut RwLockWriteGuard<'_, Vec<Book>>,
        next: Vec<Book>,
    ) -> StoreResult<()> {
        if let Err(e) = self.persistence.save(&next) {
            Logger::error("PERSISTENCE_FAILED", &[("error", e.to_string().as_str())]);
            return Err(e.into());
        }
        **books = next;
        Ok(())
    }

    /// All books in storage order
    pub fn list(&self) -> StoreResult<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    /// Point-in-time copy of the collection for read-only scans
    pub fn snapshot(&self) -> StoreResult<Vec<Book>> {
        self.list()
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn get(&self, id: &str) -> StoreResult<Book> {
        self.read()?
            .iter()
            .find(|b| b.book_id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Store a new book under a freshly generated id.
    ///
    /// Any id carried by the payload is discarded.
    pub fn create(&self, book: Book) -> StoreResult<Book> {
        let book = book.with_id(Book::new_id());

        let mut books = self.write()?;
        let mut next = books.clone();
        next.push(book.clone());
        self.commit(&mut books, next)?;

        Ok(book)
    }

    /// Replace every field of the book stored under `id`, keeping the id
    pub fn replace(&self, id: &str, book: Book) -> StoreResult<Book> {
        let book = book.with_id(id);

        let mut books = self.write()?;
        let index = books
            .iter()
            .position(|b| b.book_id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut next = books.clone();
        next[index] = book.clone();
        self.commit(&mut books, next)?;

        Ok(book)
    }

    /// Remove the book stored under `id`, preserving the order of the rest
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut books = self.write()?;
        let index = books
            .iter()
            .position(|b| b.book_id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut next = books.clone();
        next.remove(index);
        self.commit(&mut books, next)
    }
}
