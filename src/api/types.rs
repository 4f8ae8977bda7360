//! Wire payloads for the course assistant backend

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body for `POST {base}/chat`
#[derive(Debug, Serialize)]
pub struct ChatPayload<'a> {
    pub message: &'a str,
}

/// Body of a `POST {base}/chat` reply.
///
/// The backend reports some failures as 200s carrying only an `error`
/// field, so both fields are optional and checked by the caller.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub assistant_message: Option<String>,
    pub error: Option<String>,
}

/// Body for `POST {base}/rate`. Wire keys are camelCase, matching the
/// backend (`messageId`, `userInput`, `assistantOutput`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatePayload {
    pub rating: u8,
    pub message_id: String,
    pub user_input: String,
    pub assistant_output: String,
}

/// Errors from backend calls, propagated unchanged to the caller
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

impl ApiError {
    pub fn network(url: &str, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.to_string(),
            source,
        }
    }

    pub fn invalid_response(url: &str, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
