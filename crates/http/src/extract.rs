//! Extractors whose rejections render as [`AppError`] validation failures.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::header,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor; malformed or mistyped bodies become a 422.
///
/// A body without a `Content-Type` header is still parsed as JSON. Any
/// other non-JSON content type is rejected.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state).await?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

/// Path parameter extractor; unparseable segments become a 422.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct Payload {
        count: i64,
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/echo",
                post(|ValidJson(p): ValidJson<Payload>| async move { p.count.to_string() }),
            )
            .route(
                "/items/{id}",
                get(|ValidPath(id): ValidPath<i64>| async move { id.to_string() }),
            )
    }

    async fn detail_type(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        body["detail"][0]["type"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn accepts_well_formed_json() {
        let response = app()
            .oneshot(
                Request::post("/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"count": 3}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_content_type_still_parses_json() {
        let response = app()
            .oneshot(
                Request::post("/echo")
                    .body(Body::from(r#"{"count": 3}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"3");
    }

    #[tokio::test]
    async fn missing_content_type_with_broken_json_is_unprocessable() {
        let response = app()
            .oneshot(Request::post("/echo").body(Body::from("count=3")).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail_type(response).await, "json_invalid");
    }

    #[tokio::test]
    async fn non_json_content_type_is_unprocessable() {
        let response = app()
            .oneshot(
                Request::post("/echo")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from(r#"{"count": 3}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail_type(response).await, "content_type");
    }

    #[tokio::test]
    async fn mistyped_field_is_unprocessable() {
        let response = app()
            .oneshot(
                Request::post("/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"count": "three"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail_type(response).await, "value_error");
    }

    #[tokio::test]
    async fn broken_json_is_unprocessable() {
        let response = app()
            .oneshot(
                Request::post("/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail_type(response).await, "json_invalid");
    }

    #[tokio::test]
    async fn non_integer_path_is_unprocessable() {
        let response = app()
            .oneshot(Request::get("/items/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail_type(response).await, "type_error");
    }
}
