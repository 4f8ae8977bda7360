use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "coursechat",
    version,
    about = "Terminal chat front end for the course assistant"
)]
pub struct Cli {
    /// Backend base URL override, e.g. http://127.0.0.1:5000/api
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long)]
    pub config: Option<String>,
    #[arg(long, short, value_enum)]
    pub mode: Option<RunMode>,
    /// Prompt words for ask mode
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Full-screen chat interface
    Tui,
    /// One-shot prompt, JSON reply on stdout
    Ask,
}
