//! Rate-limit and abuse-limit handling
//!
//! GitHub signals two kinds of limits with 403/429 responses:
//! - the primary limit, when the hourly request quota is used up
//! - the secondary ("abuse") limit, when requests come in too fast
//!
//! `classify` recognises them from the response, and `ThrottlePolicy`
//! decides whether the client waits and tries again.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::fmt;
use std::time::Duration;
use tracing::warn;

const RATELIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATELIMIT_RESET: &str = "x-ratelimit-reset";

/// Wait used when an abuse limit carries no `retry-after` hint
const DEFAULT_ABUSE_WAIT: Duration = Duration::from_secs(60);

/// Which limit a response hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Primary,
    Abuse,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitKind::Primary => write!(f, "primary rate limit"),
            LimitKind::Abuse => write!(f, "abuse limit"),
        }
    }
}

/// A limit recognised in a response, with GitHub's wait hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub kind: LimitKind,
    pub retry_after: Duration,
}

/// Recognises a rate-limit response
///
/// # Arguments
/// * `status` - Response status
/// * `headers` - Response headers
/// * `body` - Response body text
/// * `now` - Current Unix time in seconds, used against `x-ratelimit-reset`
pub fn classify(status: StatusCode, headers: &HeaderMap, body: &str, now: i64) -> Option<RateLimit> {
    if status != StatusCode::FORBIDDEN && status != StatusCode::TOO_MANY_REQUESTS {
        return None;
    }

    let retry_after = header_u64(headers, RETRY_AFTER.as_str()).map(Duration::from_secs);

    if header_u64(headers, RATELIMIT_REMAINING) == Some(0) {
        let until_reset = header_u64(headers, RATELIMIT_RESET)
            .map(|reset| Duration::from_secs((reset as i64 - now).max(0) as u64));

        return Some(RateLimit {
            kind: LimitKind::Primary,
            retry_after: retry_after.or(until_reset).unwrap_or_default(),
        });
    }

    let body = body.to_ascii_lowercase();
    if retry_after.is_some() || body.contains("secondary rate limit") || body.contains("abuse") {
        return Some(RateLimit {
            kind: LimitKind::Abuse,
            retry_after: retry_after.unwrap_or(DEFAULT_ABUSE_WAIT),
        });
    }

    None
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// What the client does when a limit is hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrottlePolicy {
    /// Wait out the primary limit instead of failing
    pub retry_primary: bool,

    /// Upper bound on abuse-limit retries for a single request
    pub max_abuse_retries: u32,
}

impl ThrottlePolicy {
    /// Reports a limit and returns whether the request should be retried
    ///
    /// # Arguments
    /// * `limit` - The limit that was hit
    /// * `retries` - Limit retries already made for this request
    pub fn on_limit(&self, limit: &RateLimit, retries: u32) -> bool {
        match limit.kind {
            LimitKind::Primary => {
                warn!("Request quota exhausted");
                self.retry_primary
            }
            LimitKind::Abuse => {
                if retries >= self.max_abuse_retries {
                    warn!(
                        "Abuse limit triggered, giving up after {} retries",
                        retries
                    );
                    return false;
                }
                warn!(
                    "Abuse limit triggered, retrying after {}s ...",
                    limit.retry_after.as_secs()
                );
                true
            }
        }
    }
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            retry_primary: false,
            max_abuse_retries: 5,
        }
    }
}
