//! Repository layer
//!
//! Repositories abstract the GitHub runner endpoints behind a trait so the
//! provisioning service can be exercised against an in-memory fake.

mod github;
#[cfg(test)]
pub mod memory;

// Re-export traits
pub use github::RunnerRepository;

#[cfg(test)]
pub use memory::InMemoryRunnerRepository;
