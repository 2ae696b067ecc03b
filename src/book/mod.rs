//! # Book Records
//!
//! The single entity managed by the service. Field names on the wire and on
//! disk are camelCase (`bookId`, `authorId`, ...).

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A bibliographic record.
///
/// Every field defaults to its zero value when absent from a request body
/// or sent as `null`, so clients may send partial documents. Updates are
/// still full replacements: omitted fields are stored as their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    /// Server-assigned identifier, never changed after creation
    #[serde(deserialize_with = "null_as_default")]
    pub book_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Free-form date text, not validated
    #[serde(deserialize_with = "null_as_default")]
    pub publication_date: String,
    /// Not validated
    #[serde(deserialize_with = "null_as_default")]
    pub isbn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    /// Generate a fresh identifier for a new record
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Return this record stored under `id`, discarding any id it carried
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.book_id = id.into();
        self
    }

    /// Case-insensitive containment check against title or description.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
