use super::error::ConfigError;
use crate::constants::{BASE_URL_ENV, CONFIG_PATH, DEFAULT_BASE_URL, DEFAULT_MAX_LINE_LEN, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub base_url: Option<String>,
    pub max_line_len: Option<usize>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    let parsed = read_config(config_path)?;
    validate_and_build(parsed)
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        // A missing file is not an error: env and built-in defaults apply.
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(RawConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    // Precedence: environment > config file > built-in default. The CLI
    // flag, when present, overrides all three (applied in `run`).
    let base_url = std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or(parsed.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    if base_url.trim().is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }

    let max_line_len = parsed.max_line_len.unwrap_or(DEFAULT_MAX_LINE_LEN);
    if max_line_len == 0 {
        return Err(ConfigError::ZeroMaxLineLen);
    }

    Ok(super::AppConfig {
        base_url,
        max_line_len,
    })
}
