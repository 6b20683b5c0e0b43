//! Cash flow terminal dashboard.
//!
//! Renders the backend's payments, inventory, cash flow summary and copilot
//! as text. Every backend call goes through `cashflow_client::ApiClient`.
//!
//! Usage: cashflow <command> [args]   (see `cashflow help`)

mod cli;
mod render;
mod screens;

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cashflow_client::ApiClient;
use cashflow_shared::AppConfig;

use crate::cli::{Command, USAGE};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cashflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match cli::parse(&args) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;
    let client = ApiClient::new(&config.client)?;

    let output = screens::dispatch(&client, command).await?;
    println!("{output}");
    Ok(())
}
