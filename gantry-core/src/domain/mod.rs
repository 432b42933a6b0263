//! Core domain types
//!
//! These types describe what GitHub reports about self-hosted runners and the
//! repository scope every API call is made against. They are read-only
//! snapshots: the platform owns the records.

pub mod repo;
pub mod runner;
