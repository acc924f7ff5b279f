//! HTTP handlers for the Books module.

use axum::{
    extract::State,
    response::Redirect,
    routing::{any, get},
    Json, Router,
};

use bookshelf_http::{AppError, ValidJson, ValidPath};

use super::models::{Book, BookId, Message};
use super::registry::{BookStore, RegistryError};

pub const DUPLICATE_DETAIL: &str = "Book with this ID already exists";
pub const NOT_FOUND_DETAIL: &str = "Book not found";
pub const DELETED_MESSAGE: &str = "Book deleted successfully";

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateIdentifier(_) => AppError::bad_request(DUPLICATE_DETAIL),
            RegistryError::NotFound(_) => AppError::not_found(NOT_FOUND_DETAIL),
        }
    }
}

/// Routes under `/books`, bound to `store`.
pub fn router(store: BookStore) -> Router {
    Router::new()
        .route("/books", any(redirect_to_collection))
        .route("/books/", get(list_books).post(create_book))
        .route(
            "/books/{book_id}",
            get(get_book).put(replace_book).delete(delete_book),
        )
        .with_state(store)
}

/// `/books` without the trailing slash redirects, keeping the method.
async fn redirect_to_collection() -> Redirect {
    Redirect::temporary("/books/")
}

async fn create_book(
    State(store): State<BookStore>,
    ValidJson(book): ValidJson<Book>,
) -> Result<Json<Book>, AppError> {
    let created = store.create(book).await?;
    tracing::debug!(target: "bookshelf.books", book_id = created.id, "book created");
    Ok(Json(created))
}

async fn list_books(State(store): State<BookStore>) -> Json<Vec<Book>> {
    let books = store.list().await;
    tracing::info!(target: "bookshelf.books", count = books.len(), "retrieving books");
    Json(books)
}

async fn get_book(
    State(store): State<BookStore>,
    ValidPath(book_id): ValidPath<BookId>,
) -> Result<Json<Book>, AppError> {
    let book = store.get(book_id).await?;
    tracing::info!(target: "bookshelf.books", book_id, "returning book");
    Ok(Json(book))
}

async fn replace_book(
    State(store): State<BookStore>,
    ValidPath(book_id): ValidPath<BookId>,
    ValidJson(book): ValidJson<Book>,
) -> Result<Json<Book>, AppError> {
    if book.id != book_id {
        tracing::debug!(
            target: "bookshelf.books",
            book_id,
            new_id = book.id,
            "replacement changes the book id"
        );
    }
    Ok(Json(store.replace(book_id, book).await?))
}

async fn delete_book(
    State(store): State<BookStore>,
    ValidPath(book_id): ValidPath<BookId>,
) -> Result<Json<Message>, AppError> {
    store.delete(book_id).await?;
    Ok(Json(Message::new(DELETED_MESSAGE)))
}
