//! Bookshelf: an in-memory book management service.
//!
//! The `books` module owns the registry and its HTTP routes; `home` serves
//! the welcome message at `/`.

pub mod modules;

pub use modules::books::{
    models::{Book, BookId, Message},
    registry::{BookRegistry, BookStore, RegistryError},
};

use bookshelf_kernel::{settings::Settings, ModuleRegistry};

/// Module registry wired to `store`, as the binary builds it.
pub fn module_registry(store: BookStore) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, store);
    registry
}

/// Full application router over a fresh module registry.
pub fn app(store: BookStore, settings: &Settings) -> axum::Router {
    bookshelf_http::build_router(&module_registry(store), settings)
}
