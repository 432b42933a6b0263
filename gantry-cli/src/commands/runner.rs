//! Runner command handlers
//!
//! Handles the runner lifecycle commands: registration token, registration
//! wait, removal and listing.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use gantry_core::domain::runner::{Runner, RunnerStatus};
use std::time::Duration;

use crate::client::get_client;
use crate::config::Config;
use crate::repository::RunnerRepository;
use crate::service::{Provisioner, WaitPolicy};

/// Options of the `wait` command
#[derive(Debug, Args)]
pub struct WaitArgs {
    /// Label of the runner to wait for
    #[arg(long, env = "GANTRY_LABEL")]
    pub label: String,

    /// Seconds to wait before the first lookup
    #[arg(long, default_value_t = 30)]
    pub quiet_period: u64,

    /// Seconds between lookups
    #[arg(long, default_value_t = 20)]
    pub poll_interval: u64,

    /// Minutes of polling before giving up
    #[arg(long, default_value_t = 1)]
    pub timeout_minutes: u64,
}

impl WaitArgs {
    fn policy(&self) -> WaitPolicy {
        WaitPolicy {
            quiet_period: Duration::from_secs(self.quiet_period),
            poll_interval: Duration::from_secs(self.poll_interval),
            timeout: Duration::from_secs(self.timeout_minutes * 60),
        }
    }
}

/// Builds a provisioner on top of the shared client
fn provisioner(config: &Config) -> Result<Provisioner> {
    let client = get_client(config).context("Failed to initialize GitHub client")?;
    Ok(Provisioner::new(client, config.repository.clone()))
}

/// Print a registration token for the external provisioning step
pub async fn registration_token(config: &Config) -> Result<()> {
    let token = provisioner(config)?.fetch_registration_token().await?;
    println!("{}", token.token);
    Ok(())
}

/// Block until the labelled runner is online
pub async fn wait(config: &Config, args: WaitArgs) -> Result<()> {
    let provisioner = provisioner(config)?.with_wait_policy(args.policy());
    provisioner.wait_for_runner_registered(&args.label).await?;
    Ok(())
}

/// Deregister the labelled runner
pub async fn remove(config: &Config, label: &str) -> Result<()> {
    provisioner(config)?.remove_runner(label).await?;
    Ok(())
}

/// List all runners registered with the repository
pub async fn list_runners(config: &Config) -> Result<()> {
    let client = get_client(config).context("Failed to initialize GitHub client")?;
    let runners = client
        .list_runners(&config.repository)
        .await
        .context("Failed to list runners")?;

    if runners.is_empty() {
        println!("{}", "No runners registered.".yellow());
    } else {
        println!(
            "{}",
            format!(
                "Found {} registered runner(s) in {}:",
                runners.len(),
                config.repository
            )
            .bold()
        );
        println!();
        for runner in runners {
            print_runner_summary(&runner);
        }
    }

    Ok(())
}

/// Print a runner summary
fn print_runner_summary(runner: &Runner) {
    let status_colored = colorize_status(&runner.status);
    let labels: Vec<&str> = runner.labels.iter().map(|l| l.name.as_str()).collect();

    println!("  {} Runner {} ({})", "▸".cyan(), runner.name.bold(), runner.id);
    println!("    Status:       {}", status_colored);
    println!(
        "    Busy:         {}",
        if runner.busy { "yes".yellow() } else { "no".dimmed() }
    );
    println!("    OS:           {}", runner.os.dimmed());
    println!("    Labels:       {}", labels.join(", ").dimmed());
    println!();
}

/// Colorize runner status for display
fn colorize_status(status: &RunnerStatus) -> colored::ColoredString {
    let status_str = status.to_string();
    match status {
        RunnerStatus::Online => status_str.green(),
        RunnerStatus::Offline => status_str.red(),
        RunnerStatus::Unknown => status_str.yellow(),
    }
}
