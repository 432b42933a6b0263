//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod runner;

pub use runner::WaitArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::{ConnectionArgs, generate_label};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a runner registration token and print it
    Token,
    /// Wait until the runner with the given label is online
    Wait(WaitArgs),
    /// Deregister the runner with the given label
    Remove {
        /// Label of the runner to remove
        #[arg(long, env = "GANTRY_LABEL")]
        label: String,
    },
    /// List the repository's self-hosted runners
    List,
    /// Print a new unique runner label
    Label,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler. Only commands that talk
/// to GitHub resolve the connection options.
///
/// # Arguments
/// * `command` - The command to execute
/// * `connection` - Connection options from flags and environment
pub async fn handle_command(command: Commands, connection: ConnectionArgs) -> Result<()> {
    match command {
        Commands::Token => runner::registration_token(&connection.into_config()?).await,
        Commands::Wait(args) => runner::wait(&connection.into_config()?, args).await,
        Commands::Remove { label } => runner::remove(&connection.into_config()?, &label).await,
        Commands::List => runner::list_runners(&connection.into_config()?).await,
        Commands::Label => {
            println!("{}", generate_label());
            Ok(())
        }
    }
}
