//! Runner DTOs
//!
//! Response bodies of the repository runner endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::runner::Runner;

/// One page of `GET /repos/{owner}/{repo}/actions/runners`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerList {
    /// Total number of runners across all pages
    pub total_count: u64,

    /// Runners on this page
    pub runners: Vec<Runner>,
}

/// Short-lived credential that lets a new runner register itself
#[derive(Clone, Serialize, Deserialize)]
pub struct RegistrationToken {
    pub token: String,

    /// When GitHub stops accepting the token
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for RegistrationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
