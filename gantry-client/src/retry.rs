//! Request retry policy
//!
//! Failed requests are retried a fixed number of times with quadratic
//! backoff, except for statuses the policy is told to leave alone.

use std::time::Duration;

/// Retry behaviour for failed requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// How many times a failed request is repeated
    pub retries: u32,

    /// Statuses that are never retried
    pub do_not_retry: Vec<u16>,

    /// Base of the backoff: retry `n` waits `(n + 1)^2` units
    pub delay_unit: Duration,
}

impl RetryPolicy {
    /// Creates a policy with the given retry count and no excluded statuses
    pub fn new(retries: u32) -> Self {
        Self {
            retries,
            do_not_retry: Vec::new(),
            delay_unit: Duration::from_secs(1),
        }
    }

    /// Excludes a status from automatic retry
    pub fn without_status(mut self, status: u16) -> Self {
        if !self.do_not_retry.contains(&status) {
            self.do_not_retry.push(status);
        }
        self
    }

    /// Scales the backoff
    pub fn with_delay_unit(mut self, delay_unit: Duration) -> Self {
        self.delay_unit = delay_unit;
        self
    }

    /// A policy that never retries
    pub fn disabled() -> Self {
        Self::new(0)
    }

    /// Returns the delay before retrying, or `None` if the request should fail
    ///
    /// # Arguments
    /// * `attempt` - Number of retries already made for this request
    /// * `status` - Response status, `None` for transport errors
    pub fn backoff(&self, attempt: u32, status: Option<u16>) -> Option<Duration> {
        if attempt >= self.retries {
            return None;
        }

        if let Some(status) = status {
            if self.do_not_retry.contains(&status) {
                return None;
            }
        }

        let step = attempt + 1;
        Some(self.delay_unit * (step * step))
    }
}

impl Default for RetryPolicy {
    /// Two retries, leaving 429 to the throttle policy
    fn default() -> Self {
        Self::new(2).without_status(429)
    }
}
