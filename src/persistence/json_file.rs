//! # JSON File Backend

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::backend::BookPersistence;
use super::errors::{PersistenceError, PersistenceResult};
use crate::book::Book;

/// Stores the collection as a pretty-printed JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a backend for the given file. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, e: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.display_path(),
            message: e.to_string(),
        }
    }
}

impl BookPersistence for JsonFileStore {
    fn load(&self) -> PersistenceResult<Vec<Book>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&content).map_err(|e| PersistenceError::Decode {
            path: self.display_path(),
            message: e.to_string(),
        })
    }

    fn save(&self, books: &[Book]) -> PersistenceResult<()> {
        let content = serde_json::to_vec_pretty(books)
            .map_err(|e| PersistenceError::Encode(e.to_string()))?;

        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_book(id: &str, title: &str) -> Book {
        Book {
            book_id: id.to_string(),
            title: title.to_string(),
            pages: 412,
            price: 9.99,
            ..Default::default()
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("books.json"));

        assert!(!store.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("books.json"));
        let books = vec![sample_book("b1", "Dune"), sample_book("b2", "Emma")];

        store.save(&books).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), books);
    }

    #[test]
    fn test_save_is_human_readable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.json");
        let store = JsonFileStore::new(&path);

        store.save(&[sample_book("b1", "Dune")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"bookId\": \"b1\""));
    }

    #[test]
    fn test_save_overwrites_in_full() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("books.json"));

        store
            .save(&[sample_book("b1", "Dune"), sample_book("b2", "Emma")])
            .unwrap();
        store.save(&[sample_book("b3", "Ulysses")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].book_id, "b3");
    }

    #[test]
    fn test_malformed_file_is_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PersistenceError::Decode { .. }));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("missing").join("books.json"));

        let err = store.save(&[]).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }
}
