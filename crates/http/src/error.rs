//! Error handling for the Bookshelf HTTP layer

use axum::{
    extract::rejection::{BytesRejection, JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Body of every error response: `{"detail": ...}`.
///
/// `detail` is a plain message for domain errors and a list of
/// `{loc, msg, type}` entries for validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {} issue(s)", .details.len())]
    Validation { details: Vec<serde_json::Value> },

    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// Create a validation error
    pub fn validation(details: Vec<serde_json::Value>) -> Self {
        Self::Validation { details }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

/// One entry of a validation `detail` list.
fn issue(loc: &[&str], msg: impl Into<String>, kind: &str) -> serde_json::Value {
    json!({
        "loc": loc,
        "msg": msg.into(),
        "type": kind,
    })
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_error",
        };
        AppError::validation(vec![issue(&["body"], rejection.body_text(), kind)])
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::validation(vec![issue(&["body"], rejection.body_text(), "body_error")])
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(vec![issue(
            &["path"],
            rejection.body_text(),
            "type_error",
        )])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::now_v7();
        let status = self.status();

        tracing::warn!(
            error_id = %error_id,
            status_code = %status.as_u16(),
            error = %self,
            "Request error"
        );

        let detail = match self {
            AppError::Validation { details } => serde_json::Value::from(details),
            AppError::BadRequest { message } | AppError::NotFound { message } => {
                serde_json::Value::String(message)
            }
            AppError::MethodNotAllowed => serde_json::Value::from("Method Not Allowed"),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
