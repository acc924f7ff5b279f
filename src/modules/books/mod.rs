pub mod models;
pub mod registry;
pub mod routes;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};
use serde_json::{json, Value};

use super::{json_response, schema_ref};
use registry::BookStore;

/// Books module: CRUD over the in-memory book registry
pub struct BooksModule {
    store: BookStore,
}

impl BooksModule {
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<Value> {
        let book_id = json!({
            "name": "book_id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer", "format": "int64" }
        });
        let book_body = json!({
            "required": true,
            "content": {
                "application/json": { "schema": { "$ref": "#/components/schemas/Book" } }
            }
        });

        Some(json!({
            "paths": {
                "/books/": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": json_response("Books in insertion order", json!({
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Book" }
                            }))
                        }
                    },
                    "post": {
                        "summary": "Add a book",
                        "tags": ["Books"],
                        "requestBody": book_body,
                        "responses": {
                            "200": json_response("Created book", schema_ref("Book")),
                            "400": json_response("Book with this ID already exists", schema_ref("ErrorResponse")),
                            "422": json_response("Validation error", schema_ref("ErrorResponse"))
                        }
                    }
                },
                "/books/{book_id}": {
                    "get": {
                        "summary": "Get a book",
                        "tags": ["Books"],
                        "parameters": [book_id],
                        "responses": {
                            "200": json_response("Matching book", schema_ref("Book")),
                            "404": json_response("Book not found", schema_ref("ErrorResponse"))
                        }
                    },
                    "put": {
                        "summary": "Replace a book",
                        "tags": ["Books"],
                        "parameters": [book_id],
                        "requestBody": book_body,
                        "responses": {
                            "200": json_response("Replacement book", schema_ref("Book")),
                            "404": json_response("Book not found", schema_ref("ErrorResponse")),
                            "422": json_response("Validation error", schema_ref("ErrorResponse"))
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": [book_id],
                        "responses": {
                            "200": json_response("Book deleted", schema_ref("Message")),
                            "404": json_response("Book not found", schema_ref("ErrorResponse"))
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "integer",
                                "format": "int64",
                                "description": "Unique identifier for the book"
                            },
                            "title": {
                                "type": "string",
                                "description": "Title of the book"
                            },
                            "author": {
                                "type": "string",
                                "description": "Author of the book"
                            },
                            "year": {
                                "type": "integer",
                                "format": "int64",
                                "description": "Year the book was published"
                            },
                            "available": {
                                "type": "boolean",
                                "description": "Availability status of the book"
                            }
                        },
                        "required": ["id", "title", "author", "year", "available"]
                    },
                    "Message": {
                        "type": "object",
                        "properties": {
                            "message": { "type": "string" }
                        },
                        "required": ["message"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let discarded = self.store.len().await;
        tracing::info!(module = self.name(), discarded, "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(store: BookStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(store))
}
