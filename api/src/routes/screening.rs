use axum::routing::post;
use axum::{Json, Router};

use nurovia_core::error::ApiError;
use nurovia_core::screening::{self, Assessment, ObservationSet};

use crate::extract::AppJson;

pub fn router() -> Router {
    Router::new().route("/assess", post(assess))
}

/// Score one set of patient observations.
///
/// The scorer is total: missing fields simply do not count and malformed
/// numeric values degrade per field, so a partially filled form still gets
/// a classification. Only a body that fails to deserialize is rejected.
#[utoipa::path(
    post,
    path = "/assess",
    request_body = ObservationSet,
    responses(
        (status = 200, description = "Risk classification with contributing factors", body = Assessment),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 429, description = "Rate limited", body = ApiError)
    ),
    tag = "screening"
)]
pub async fn assess(AppJson(observations): AppJson<ObservationSet>) -> Json<Assessment> {
    let assessment = screening::assess(&observations);
    tracing::debug!(
        score = assessment.score,
        risk = %assessment.risk,
        "assessment computed"
    );
    Json(assessment)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::router;

    async fn post_assess(body: Value) -> (StatusCode, Value) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/assess")
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
    async fn full_presentation_scores_high() {
        let (status, body) = post_assess(json!({
            "facial_droop": "yes",
            "arm_weakness": "yes",
            "speech_difficulty": "no",
            "onset_time": "5",
            "age": "70",
            "history": "no"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "risk": "High",
                "score": 6,
                "details": [
                    "Facial droop detected (+2)",
                    "Arm weakness detected (+2)",
                    "Symptom onset > 3 hrs (+1)",
                    "Age > 60 (+1)",
                ],
            })
        );
    }

    #[tokio::test]
    async fn empty_body_scores_low() {
        let (status, body) = post_assess(json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"risk": "Low", "score": 0, "details": []}));
    }

    #[tokio::test]
    async fn non_string_field_is_rejected_with_structured_error() {
        let (status, body) = post_assess(json!({"age": 72})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["field"], "body");
        assert!(
            body["message"]
                .as_str()
                .expect("message should be a string")
                .contains("Invalid request body"),
        );
    }
}
