//! HTTP client for the course assistant backend

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::traits::AssistantBackend;
use super::types::{ApiError, ChatPayload, ChatReply, RatePayload};

/// REST client for the two backend endpoints (`/chat` and `/rate`).
///
/// The base URL is injected at construction; there is no global client.
/// Calls carry no retry or timeout handling and surface failures as-is.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Build URL from the base URL and a path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn post_json<Req, Res>(&self, url: &str, body: &Req) -> Result<Res, ApiError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        self.http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::network(url, e))?
            .error_for_status()
            .map_err(|e| ApiError::network(url, e))?
            .json()
            .await
            .map_err(|e| ApiError::network(url, e))
    }
}

#[async_trait]
impl AssistantBackend for ApiClient {
    async fn send_message(&self, message: &str) -> Result<String, ApiError> {
        let url = self.build_url("/chat");
        info!(chars = message.len(), "Sending message to course assistant");

        let reply: ChatReply = self.post_json(&url, &ChatPayload { message }).await?;
        debug!("Received reply from course assistant");

        if let Some(error) = reply.error {
            return Err(ApiError::invalid_response(&url, error));
        }
        reply
            .assistant_message
            .ok_or_else(|| ApiError::invalid_response(&url, "missing assistant_message"))
    }

    async fn rate_message(&self, payload: RatePayload) -> Result<(), ApiError> {
        let url = self.build_url("/rate");
        info!(
            rating = payload.rating,
            message_id = %payload.message_id,
            "Submitting rating"
        );

        // The ack body is backend-defined and unused by the client.
        let _ack: serde_json::Value = self.post_json(&url, &payload).await?;
        Ok(())
    }
}
