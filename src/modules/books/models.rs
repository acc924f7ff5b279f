use serde::{Deserialize, Serialize};

/// Caller-supplied book identifier.
pub type BookId = i64;

/// A book record. Every field is required on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Year the book was published
    pub year: i64,
    /// Availability status of the book
    pub available: bool,
}

/// `{"message": ...}` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_rejected() {
        let err = serde_json::from_str::<Book>(
            r#"{"id": 1, "title": "Dune", "author": "Herbert", "year": 1965}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("available"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let book: Book = serde_json::from_str(
            r#"{"id": 1, "title": "Dune", "author": "Herbert", "year": 1965,
                "available": true, "isbn": "0441013597"}"#,
        )
        .unwrap();
        assert_eq!(book.title, "Dune");
    }
}
