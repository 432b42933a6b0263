//! Process-wide GitHub client
//!
//! One authenticated client is built on first use and shared for the rest of
//! the process, so the installation token cache is shared too.

use gantry_client::{ClientError, GitHubClient, RetryPolicy, ThrottlePolicy};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;

/// Retries after the first failed attempt
const REQUEST_RETRIES: u32 = 2;

static CLIENT: OnceCell<Arc<GitHubClient>> = OnceCell::new();

/// Returns the shared client, building it on the first call
///
/// Later calls return the same instance and ignore `config`; there is no way
/// to reconfigure or reset the client.
pub fn get_client(config: &Config) -> Result<Arc<GitHubClient>, ClientError> {
    CLIENT
        .get_or_try_init(|| {
            debug!(
                "Initializing GitHub client for app {} (installation {}) at {}",
                config.credentials.app_id, config.credentials.installation_id, config.api_url
            );

            GitHubClient::builder(config.credentials.clone())
                .api_url(config.api_url.as_str())
                .retry(RetryPolicy::new(REQUEST_RETRIES).without_status(429))
                .throttle(ThrottlePolicy::default())
                .build()
                .map(Arc::new)
        })
        .cloned()
}
