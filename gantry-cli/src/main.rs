//! Gantry CLI
//!
//! Registers and deregisters ephemeral GitHub self-hosted runners.
//!
//! Architecture:
//! - Configuration: GitHub App credentials and repository from flags or environment
//! - Client: one shared, authenticated GitHub client per process
//! - Repositories: runner endpoints behind a trait
//! - Services: label lookup, registration token, removal and the registration wait loop
//!
//! Logs go to stderr so that command output on stdout (e.g. the registration
//! token) can be captured by the calling workflow.

mod client;
mod commands;
mod config;
mod repository;
mod service;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::ConnectionArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gantry")]
#[command(about = "Ephemeral GitHub self-hosted runner registration", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gantry=info,gantry_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    handle_command(cli.command, cli.connection).await
}
