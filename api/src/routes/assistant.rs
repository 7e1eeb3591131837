use axum::routing::post;
use axum::{Json, Router};

use nurovia_core::assistant::{self, ChatReply, ChatRequest};
use nurovia_core::error::ApiError;

use crate::extract::AppJson;

pub fn router() -> Router {
    Router::new().route("/chat", post(chat))
}

/// Answer a free-text question with a canned reply.
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatReply),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 429, description = "Rate limited", body = ApiError)
    ),
    tag = "assistant"
)]
pub async fn chat(AppJson(request): AppJson<ChatRequest>) -> Json<ChatReply> {
    let message = request.message.as_deref().unwrap_or_default();
    Json(ChatReply {
        reply: assistant::reply_to(message).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::router;

    async fn post_chat(body: Value) -> (StatusCode, Value) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request should build"),
            )
            .await
            .expect("request should succeed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should collect");
        let parsed = serde_json::from_slice(&bytes).expect("body should be JSON");
        (status, parsed)
    }

    #[tokio::test]
    async fn definition_question_gets_the_definition_reply() {
        let (status, body) = post_chat(json!({"message": "What is stroke?"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["reply"],
            "Stroke is a medical emergency where blood flow to the brain is interrupted."
        );
    }

    #[tokio::test]
    async fn missing_message_gets_the_default_reply() {
        let (status, body) = post_chat(json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["reply"],
            "I am your stroke assistant. Ask me anything related to stroke or your symptoms."
        );
    }
}
