//! Provisioning errors

use gantry_client::ClientError;
use std::time::Duration;
use thiserror::Error;

/// Failures the provisioning workflow cannot recover from
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The registration token could not be created
    #[error("GitHub Registration Token receiving error: {0}")]
    Registration(#[source] ClientError),

    /// The runner was found but deleting it failed
    #[error("GitHub self-hosted runner {runner} removal error: {source}")]
    Removal {
        runner: String,
        #[source]
        source: ClientError,
    },

    /// No online runner showed up within the timeout
    #[error(
        "A timeout of {} minutes is exceeded. Your instance was not able to register itself in GitHub as a new self-hosted runner.",
        .timeout.as_secs() / 60
    )]
    RegistrationTimeout { timeout: Duration },
}
