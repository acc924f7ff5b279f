//! In-memory book registry and the shared store handed to handlers.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use super::models::{Book, BookId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("book {0} already exists")]
    DuplicateIdentifier(BookId),
    #[error("book {0} not found")]
    NotFound(BookId),
}

/// Ordered sequence of books, kept in insertion order.
///
/// Lookups scan front to back and act on the first match. Ids are unique
/// on insert, but `replace` may rename a record onto an id that is already
/// taken; the first match still wins afterwards.
#[derive(Debug, Default)]
pub struct BookRegistry {
    books: Vec<Book>,
}

impl BookRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `book` unless its id is already present
    pub fn create(&mut self, book: Book) -> Result<Book, RegistryError> {
        if self.position(book.id).is_some() {
            return Err(RegistryError::DuplicateIdentifier(book.id));
        }
        self.books.push(book.clone());
        Ok(book)
    }

    /// All books in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// First book whose id matches
    pub fn get(&self, id: BookId) -> Result<&Book, RegistryError> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    /// Overwrite the record stored under `id` with `book`, including its id.
    pub fn replace(&mut self, id: BookId, book: Book) -> Result<Book, RegistryError> {
        let index = self.position(id).ok_or(RegistryError::NotFound(id))?;
        self.books[index] = book.clone();
        Ok(book)
    }

    /// Remove the first matching book, keeping the order of the rest
    pub fn delete(&mut self, id: BookId) -> Result<Book, RegistryError> {
        let index = self.position(id).ok_or(RegistryError::NotFound(id))?;
        Ok(self.books.remove(index))
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether no books are stored
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}

/// Cloneable handle to one [`BookRegistry`].
///
/// Each mutation holds the write lock for its whole check-then-act step, so
/// concurrent creates cannot both pass the duplicate check.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    inner: Arc<RwLock<BookRegistry>>,
}

impl BookStore {
    /// Create a store over an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book under the write lock
    pub async fn create(&self, book: Book) -> Result<Book, RegistryError> {
        self.inner.write().await.create(book)
    }

    /// Snapshot of all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.inner.read().await.list().to_vec()
    }

    /// Clone of the book stored under `id`
    pub async fn get(&self, id: BookId) -> Result<Book, RegistryError> {
        self.inner.read().await.get(id).cloned()
    }

    /// Replace the book stored under `id` under the write lock
    pub async fn replace(&self, id: BookId, book: Book) -> Result<Book, RegistryError> {
        self.inner.write().await.replace(id, book)
    }

    /// Remove the book stored under `id` under the write lock
    pub async fn delete(&self, id: BookId) -> Result<Book, RegistryError> {
        self.inner.write().await.delete(id)
    }

    /// Number of stored books
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
