use async_trait::async_trait;
use axum::{routing::get, Json, Router};
use bookshelf_kernel::Module;
use serde_json::{json, Value};

use super::{books::models::Message, json_response, schema_ref};

pub const WELCOME_MESSAGE: &str = "Welcome to the Book Management System!";

/// Owns the root path
pub struct HomeModule;

impl HomeModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for HomeModule {
    fn name(&self) -> &'static str {
        "home"
    }

    fn routes(&self) -> Router {
        Router::new().route("/", get(welcome))
    }

    fn openapi(&self) -> Option<Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Welcome message",
                        "responses": {
                            "200": json_response("Welcome message", schema_ref("Message"))
                        }
                    }
                }
            }
        }))
    }
}

async fn welcome() -> Json<Message> {
    Json(Message::new(WELCOME_MESSAGE))
}

/// Create a new instance of the home module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(HomeModule::new())
}
