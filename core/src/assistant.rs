use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reply rules, evaluated top to bottom against the lower-cased message.
/// The first needle found as a substring wins.
const REPLY_RULES: &[(&str, &str)] = &[
    (
        "what is stroke",
        "Stroke is a medical emergency where blood flow to the brain is interrupted.",
    ),
    (
        "signs",
        "Common signs include facial drooping, arm weakness, and speech difficulties.",
    ),
];

/// Fallback for messages no rule matches, including the empty message.
const DEFAULT_REPLY: &str =
    "I am your stroke assistant. Ask me anything related to stroke or your symptoms.";

/// A free-text question for the assistant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The user's message. Absent is treated as empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The assistant's canned answer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub reply: String,
}

/// Pick the reply for a message: first matching rule, else the default.
/// Matching is case-insensitive substring containment, never equality.
pub fn reply_to(message: &str) -> &'static str {
    let normalized = message.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|(needle, _)| normalized.contains(needle))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_rule_matches_case_insensitively() {
        assert_eq!(
            reply_to("What IS Stroke??"),
            "Stroke is a medical emergency where blood flow to the brain is interrupted."
        );
    }

    #[test]
    fn signs_rule_matches_inside_longer_messages() {
        assert_eq!(
            reply_to("please tell me the warning SIGNS"),
            "Common signs include facial drooping, arm weakness, and speech difficulties."
        );
    }

    #[test]
    fn earlier_rule_wins_when_both_match() {
        assert_eq!(
            reply_to("what is stroke and what are its signs"),
            "Stroke is a medical emergency where blood flow to the brain is interrupted."
        );
    }

    #[test]
    fn unmatched_and_empty_messages_get_the_default() {
        assert_eq!(reply_to("hello there"), DEFAULT_REPLY);
        assert_eq!(reply_to(""), DEFAULT_REPLY);
    }

    #[test]
    fn chat_request_message_is_optional() {
        let request: ChatRequest = serde_json::from_str("{}").expect("empty body should parse");
        assert!(request.message.is_none());
    }
}
