pub mod books;
pub mod home;

use bookshelf_kernel::ModuleRegistry;
use serde_json::{json, Value};

use books::registry::BookStore;

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, store: BookStore) {
    registry.register(home::create_module());
    registry.register(books::create_module(store));
}

/// `$ref` to a schema under `components.schemas`.
pub(crate) fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

/// `application/json` response object with the given schema.
pub(crate) fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": schema }
        }
    })
}
