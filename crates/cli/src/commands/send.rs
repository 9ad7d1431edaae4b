//! Send a message to a recipient's mailbox.
//!
//! The message sits in the recipient's mailbox until they read it or it
//! expires, whichever comes first. A timeout of zero lets the server apply
//! its default of 60 seconds.

use anyhow::Result;
use shared::api::SubmitMessagePayload;

use crate::{api::Api, config::Config, ui};

pub async fn run(config: &Config, username: &str, message: &str, timeout: i64) -> Result<()> {
    let api = Api::new(config.api_url.to_string());

    let payload = SubmitMessagePayload {
        username: username.to_string(),
        text: message.to_string(),
        timeout,
    };

    let response = ui::spin("Sending...", api.submit_message(payload)).await?;

    ui::success(&format!(
        "Sent to {} (id {})",
        ui::bold(username),
        response.id
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::api::Api;
    use shared::api::SubmitMessagePayload;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    fn make_payload(timeout: i64) -> SubmitMessagePayload {
        SubmitMessagePayload {
            username: "bob".to_string(),
            text: "hello".to_string(),
            timeout,
        }
    }

    #[tokio::test]
    async fn submit_message_returns_assigned_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(serde_json::json!({
                "username": "bob",
                "text": "hello",
                "timeout": 30
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 5})))
            .mount(&mock_server)
            .await;

        let api = Api::new(mock_server.uri());
        let response = api.submit_message(make_payload(30)).await.unwrap();

        assert_eq!(response.id, 5);
    }

    #[tokio::test]
    async fn submit_message_surfaces_validation_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(400).set_body_string("timeout: lower than 0"))
            .mount(&mock_server)
            .await;

        let api = Api::new(mock_server.uri());
        let result = api.submit_message(make_payload(-1)).await;

        assert_eq!(result.unwrap_err().to_string(), "timeout: lower than 0");
    }
}
