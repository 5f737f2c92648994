//! Coinbase Exchange CLI — Entry Point
//!
//! Wiring sequence:
//! 1. Load `.env` if present (credentials never live in the repo)
//! 2. Init tracing on stderr (RUST_LOG-controlled; stdout is reserved
//!    for response JSON)
//! 3. Parse CLI arguments
//! 4. Load + validate `ExchangeConfig` from env vars
//! 5. Build `RequestSigner` and `ExchangeClient`
//! 6. Dispatch the single command
//! 7. Map any error to exit code 1

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::error;

mod api;
mod cli;
mod commands;
mod config;

use api::auth::RequestSigner;
use api::client::ExchangeClient;
use cli::Cli;
use config::ExchangeConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Optional: real deployments may set the variables directly.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                // Help and version requests are not failures.
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = err.print();
            return code;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "Operation failed");
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, wire the signed client, run the command.
async fn run(cli: Cli) -> Result<()> {
    let config = ExchangeConfig::from_env()?;
    let signer = RequestSigner::new(&config)?;
    let client = ExchangeClient::new(signer, config.base_url.clone())?;

    commands::dispatch(&client, cli.command).await
}
