//! HTTP client for the mailbox API.

use anyhow::Result;
use reqwest::{Client, Response};
use shared::api::{DeliveredMessage, SubmitMessagePayload, SubmitMessageResponse};

pub struct Api {
    pub http: Client,
    pub base_url: String,
}

impl Api {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Deposits a message into a recipient's mailbox.
    pub async fn submit_message(
        &self,
        payload: SubmitMessagePayload,
    ) -> Result<SubmitMessageResponse> {
        let response = Self::check_response(
            self.http
                .post(format!("{}/chat", self.base_url))
                .json(&payload)
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    /// Drains all live messages for a username. The server deletes them as
    /// part of the read; a second call returns an error.
    pub async fn retrieve_messages(&self, username: &str) -> Result<Vec<DeliveredMessage>> {
        let response = Self::check_response(
            self.http
                .get(format!("{}/chat/{}", self.base_url, username))
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    async fn check_response(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            // Try to extract error message from JSON response
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|json| {
                    json.get("error")
                        .or_else(|| json.get("message"))
                        .and_then(|v| v.as_str())
                        .map(|s| s.to_string())
                })
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("Request failed")
                            .to_string()
                    } else {
                        body
                    }
                });

            anyhow::bail!("{}", message);
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test error message extraction from API responses
    mod check_response {
        use super::*;

        async fn mock_response(status: u16, body: &str) -> Response {
            use wiremock::{Mock, MockServer, ResponseTemplate, matchers::any};

            let server = MockServer::start().await;

            Mock::given(any())
                .respond_with(ResponseTemplate::new(status).set_body_string(body))
                .mount(&server)
                .await;

            reqwest::get(server.uri()).await.unwrap()
        }

        #[tokio::test]
        async fn extracts_error_field_from_json() {
            let response = mock_response(400, r#"{"error": "Invalid payload"}"#).await;
            let err = Api::check_response(response).await.unwrap_err();

            assert_eq!(err.to_string(), "Invalid payload");
        }

        #[tokio::test]
        async fn passes_plain_text_body_through() {
            let response = mock_response(404, "No unexpired messages found for bob").await;
            let err = Api::check_response(response).await.unwrap_err();

            assert_eq!(err.to_string(), "No unexpired messages found for bob");
        }

        #[tokio::test]
        async fn falls_back_to_canonical_reason_for_empty_body() {
            let response = mock_response(500, "").await;
            let err = Api::check_response(response).await.unwrap_err();

            assert_eq!(err.to_string(), "Internal Server Error");
        }

        #[tokio::test]
        async fn success_passes_through() {
            let response = mock_response(200, "[]").await;

            assert!(Api::check_response(response).await.is_ok());
        }
    }
}
