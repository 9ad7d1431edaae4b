//! Shared API request/response types used by both CLI and API server.

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Expiration applied server-side when `timeout` is omitted or zero.
pub const DEFAULT_TIMEOUT_SECS: i64 = 60;

/// Submit a message to a recipient's mailbox.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SubmitMessagePayload {
    /// Recipient username. An opaque, case-sensitive key.
    #[garde(length(min = 1))]
    pub username: String,
    /// The message body.
    #[garde(length(min = 1))]
    pub text: String,
    /// Seconds until the message expires. Zero (the default) means
    /// [`DEFAULT_TIMEOUT_SECS`].
    #[garde(range(min = 0))]
    #[serde(default)]
    pub timeout: i64,
}

/// Returned after a message is accepted.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitMessageResponse {
    pub id: i64,
}

/// A delivered message, as returned by the retrieve endpoint.
///
/// Delivery is consuming: once returned, the message no longer exists
/// server-side. Expiration time is deliberately not part of this view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveredMessage {
    pub id: i64,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use garde::Validate;

    // Submit payload validation - what the server rejects before storing
    mod submit_message {
        use super::*;

        fn make_payload(username: &str, text: &str, timeout: i64) -> SubmitMessagePayload {
            SubmitMessagePayload {
                username: username.into(),
                text: text.into(),
                timeout,
            }
        }

        #[test]
        fn rejects_empty_username() {
            let payload = make_payload("", "hello", 60);

            assert!(payload.validate().is_err());
        }

        #[test]
        fn rejects_empty_text() {
            let payload = make_payload("bob", "", 60);

            assert!(payload.validate().is_err());
        }

        #[test]
        fn rejects_negative_timeout() {
            let payload = make_payload("bob", "hello", -1);

            assert!(payload.validate().is_err());
        }

        #[test]
        fn accepts_zero_timeout_sentinel() {
            let payload = make_payload("bob", "hello", 0);

            assert!(payload.validate().is_ok());
        }

        #[test]
        fn accepts_whitespace_username() {
            // Usernames are opaque keys; only emptiness is rejected.
            let payload = make_payload("  ", "hello", 60);

            assert!(payload.validate().is_ok());
        }
    }

    // Wire format - field names and defaults must match the HTTP contract
    mod wire_format {
        use super::*;

        #[test]
        fn timeout_defaults_to_zero_when_omitted() {
            let payload: SubmitMessagePayload =
                serde_json::from_str(r#"{"username": "bob", "text": "hi"}"#).unwrap();

            assert_eq!(payload.timeout, 0);
        }

        #[test]
        fn missing_username_fails_deserialization() {
            let result =
                serde_json::from_str::<SubmitMessagePayload>(r#"{"text": "hi"}"#);

            assert!(result.is_err());
        }

        #[test]
        fn missing_text_fails_deserialization() {
            let result =
                serde_json::from_str::<SubmitMessagePayload>(r#"{"username": "bob"}"#);

            assert!(result.is_err());
        }

        #[test]
        fn delivered_message_serializes_id_and_text_only() {
            let message = DeliveredMessage {
                id: 42,
                text: "hello".into(),
            };

            let json = serde_json::to_value(&message).unwrap();

            assert_eq!(json, serde_json::json!({"id": 42, "text": "hello"}));
        }
    }
}
