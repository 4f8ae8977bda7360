use super::error::ConfigError;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_LINE_LEN};
use std::path::Path;

/// Application configuration loaded from client.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL, including any path prefix (e.g. `/api`)
    pub base_url: String,
    /// Reflow budget for assistant replies, in characters per line
    pub max_line_len: usize,
}

impl AppConfig {
    /// Load configuration from a file path (or the default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}
