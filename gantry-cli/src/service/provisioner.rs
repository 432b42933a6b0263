//! Provisioning service
//!
//! Lookup, registration-token fetch and removal of the runner identified by a
//! label. The label is the only correlation key: GitHub assigns the runner id,
//! so it is never known until a lookup finds the runner.

use gantry_core::domain::repo::RepoContext;
use gantry_core::domain::runner::Runner;
use gantry_core::dto::runner::RegistrationToken;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::error::ProvisionError;
use super::wait::WaitPolicy;
use crate::repository::RunnerRepository;

/// Registers and deregisters ephemeral runners of one repository
pub struct Provisioner {
    pub(super) repository: Arc<dyn RunnerRepository>,
    pub(super) context: RepoContext,
    pub(super) wait_policy: WaitPolicy,
}

impl Provisioner {
    /// Creates a provisioner with the default wait policy
    ///
    /// # Arguments
    /// * `repository` - Access to the runner endpoints
    /// * `context` - Repository every call is scoped to
    pub fn new(repository: Arc<dyn RunnerRepository>, context: RepoContext) -> Self {
        Self {
            repository,
            context,
            wait_policy: WaitPolicy::default(),
        }
    }

    /// Overrides the quiet period, poll interval and timeout of the wait loop
    pub fn with_wait_policy(mut self, wait_policy: WaitPolicy) -> Self {
        self.wait_policy = wait_policy;
        self
    }

    /// Finds the first runner carrying `label`
    ///
    /// Returns `None` both when no runner matches and when the lookup itself
    /// fails; callers cannot tell the two apart.
    pub async fn find_runner(&self, label: &str) -> Option<Runner> {
        match self.repository.list_runners(&self.context).await {
            Ok(runners) => runners.into_iter().find(|runner| runner.has_label(label)),
            Err(e) => {
                debug!("Runner lookup for label {} failed: {}", label, e);
                None
            }
        }
    }

    /// Creates a registration token for a new runner
    pub async fn fetch_registration_token(&self) -> Result<RegistrationToken, ProvisionError> {
        match self.repository.create_registration_token(&self.context).await {
            Ok(token) => {
                info!("GitHub Registration Token is received");
                debug!("Registration token expires at {}", token.expires_at);
                Ok(token)
            }
            Err(e) => {
                error!("GitHub Registration Token receiving error");
                Err(ProvisionError::Registration(e))
            }
        }
    }

    /// Deregisters the runner carrying `label`
    ///
    /// A runner that cannot be found is not an error: removal is skipped.
    pub async fn remove_runner(&self, label: &str) -> Result<(), ProvisionError> {
        let Some(runner) = self.find_runner(label).await else {
            info!(
                "GitHub self-hosted runner with label {} is not found, so the removal is skipped",
                label
            );
            return Ok(());
        };

        match self.repository.delete_runner(&self.context, runner.id).await {
            Ok(()) => {
                info!("GitHub self-hosted runner {} is removed", runner.name);
                Ok(())
            }
            Err(e) => {
                error!("GitHub self-hosted runner removal error");
                Err(ProvisionError::Removal {
                    runner: runner.name,
                    source: e,
                })
            }
        }
    }
}
