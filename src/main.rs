use clap::Parser;
use coursechat::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    coursechat::run(cli).await
}
