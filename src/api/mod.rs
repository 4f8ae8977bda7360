pub mod client;
pub mod traits;
pub mod types;

pub use client::ApiClient;
pub use traits::AssistantBackend;
pub use types::{ApiError, ChatPayload, ChatReply, RatePayload};
