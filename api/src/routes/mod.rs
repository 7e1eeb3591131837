use axum::http::Uri;

use crate::error::AppError;

pub mod assistant;
pub mod health;
pub mod screening;
pub mod ui;

/// Fallback for unknown paths: a structured 404 instead of axum's empty default.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        resource: uri.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn unknown_route_gets_a_structured_404() {
        let app = Router::new()
            .merge(super::health::router())
            .fallback(super::not_found);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no-such-endpoint")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("request should succeed");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should collect");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be JSON");

        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "No such endpoint: /no-such-endpoint");
    }
}
