//! Registration wait loop
//!
//! After a new instance is started it takes a while before its runner shows
//! up in GitHub. The loop stays quiet for a fixed period, then polls the
//! lookup on a fixed interval until the runner is online or the timeout
//! budget is spent.

use std::time::Duration;
use tokio::time;
use tracing::{error, info};

use super::error::ProvisionError;
use super::provisioner::Provisioner;

/// Timing of the registration wait loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Delay before the first lookup
    pub quiet_period: Duration,

    /// Delay between lookups
    pub poll_interval: Duration,

    /// Polling budget, not counting the quiet period
    pub timeout: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_secs(30),
            poll_interval: Duration::from_secs(20),
            timeout: Duration::from_secs(60),
        }
    }
}

impl Provisioner {
    /// Waits until the runner carrying `label` is reported online
    ///
    /// The timeout is checked at the start of each tick, before that tick's
    /// lookup, so a runner coming online in the tick that exhausts the budget
    /// is still reported as a timeout. There is no cancellation: the loop
    /// always ends in success or timeout.
    pub async fn wait_for_runner_registered(&self, label: &str) -> Result<(), ProvisionError> {
        let policy = self.wait_policy;

        info!(
            "Waiting {}s for the instance to be registered in GitHub as a new self-hosted runner",
            policy.quiet_period.as_secs()
        );
        time::sleep(policy.quiet_period).await;

        info!(
            "Checking every {}s if the GitHub self-hosted runner is registered",
            policy.poll_interval.as_secs()
        );

        let mut waited = Duration::ZERO;
        loop {
            time::sleep(policy.poll_interval).await;

            if waited > policy.timeout {
                error!("GitHub self-hosted runner registration error");
                return Err(ProvisionError::RegistrationTimeout {
                    timeout: policy.timeout,
                });
            }

            match self.find_runner(label).await {
                Some(runner) if runner.is_online() => {
                    info!(
                        "GitHub self-hosted runner {} is registered and ready to use",
                        runner.name
                    );
                    return Ok(());
                }
                _ => {
                    waited += policy.poll_interval;
                    info!("Checking...");
                }
            }
        }
    }
}
