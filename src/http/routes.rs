//! Fixed route table and handlers.
//!
//! Exact-path, method-qualified dispatch only. Anything unmatched is handled
//! by axum's built-in 404/405 responses, not custom logic.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

/// Build the route table.
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
}

/// Health check endpoint. Always succeeds; no dependency checks.
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Status endpoint.
pub async fn status_handler() -> impl IntoResponse {
    (StatusCode::OK, "REST API is running smoothly")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_status_handler() {
        let response = status_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"REST API is running smoothly");
    }
}
