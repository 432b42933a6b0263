//! Data Transfer Objects for the GitHub Actions runner endpoints
//!
//! Payload shapes exactly as the REST API returns them.

pub mod runner;
