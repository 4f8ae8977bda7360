use super::types::{ApiError, RatePayload};
use async_trait::async_trait;

/// Seam between the chat screen and the backend transport.
///
/// The TUI runner is generic over this trait, so controller behavior can
/// be exercised with an in-memory double.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Forward a user message and return the raw assistant reply.
    async fn send_message(&self, message: &str) -> Result<String, ApiError>;

    /// Submit a 1-5 rating for an assistant reply.
    async fn rate_message(&self, payload: RatePayload) -> Result<(), ApiError>;
}
