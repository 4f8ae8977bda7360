pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod text;
pub mod tui;

pub use api::{ApiClient, ApiError, AssistantBackend, RatePayload};
pub use cli::{Cli, RunMode};
pub use config::{AppConfig, ConfigError};
pub use text::reflow;

use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mode = cli.mode.unwrap_or(RunMode::Tui);

    // In TUI mode stray log lines would corrupt the alternate screen.
    let quiet = matches!(mode, RunMode::Tui);
    init_tracing(quiet);
    info!("Starting coursechat");
    debug!(
        mode = ?mode,
        config = ?cli.config,
        base_url = ?cli.base_url,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path or defaults");
    }
    if let Some(base_url) = cli.base_url.clone() {
        info!(url = %base_url, "Overriding backend base URL from CLI flag");
        config.base_url = base_url;
    }

    let client = Arc::new(ApiClient::new(config.base_url.clone()));

    info!(mode = ?mode, "Running client in selected mode");
    match mode {
        RunMode::Tui => {
            tui::screens::chat::run_chat(client, config).await?;
        }
        RunMode::Ask => {
            let prompt = load_prompt(&cli)?;
            info!("Dispatching single prompt via ask mode");
            let reply = client.send_message(&prompt).await?;
            let reflowed = text::reflow(&reply, config.max_line_len);
            let output = serde_json::json!({ "assistant_message": reflowed });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    info!("Client execution finished");
    Ok(())
}

fn load_prompt(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let joined = cli.prompt.join(" ");
    let prompt = joined.trim();
    if prompt.is_empty() {
        return Err("prompt required in ask mode, e.g. `coursechat -m ask what is a derivative`".into());
    }
    Ok(prompt.to_string())
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
