//! Application constants
//!
//! Single source of truth for paths and defaults.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/client.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Backend base URL used when neither config, environment, nor CLI provide one
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Environment variable that overrides the backend base URL
pub const BASE_URL_ENV: &str = "COURSECHAT_BASE_URL";

/// Default reflow budget for assistant replies, in characters per line
pub const DEFAULT_MAX_LINE_LEN: usize = 300;
