//! # Persistence Errors

use thiserror::Error;

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Persistence errors
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// Reading or writing the file failed (permissions, disk full, ...)
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// The file exists but is not a valid book collection
    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Failed to encode collection: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_file() {
        let err = PersistenceError::Decode {
            path: "books.json".to_string(),
            message: "expected value".to_string(),
        };
        assert!(err.to_string().contains("books.json"));

        let err = PersistenceError::Io {
            path: "books.json".to_string(),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().starts_with("I/O error on books.json"));
    }
}
