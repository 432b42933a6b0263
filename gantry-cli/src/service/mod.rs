//! Service layer
//!
//! The provisioning service correlates a caller-chosen label with the runner
//! GitHub eventually reports, and drives registration and removal around it.
//! Transport concerns (auth, retries, rate limits, pagination) stay in the
//! client; the service only sees final outcomes.

mod error;
mod provisioner;
mod wait;

pub use provisioner::Provisioner;
pub use wait::WaitPolicy;
