//! Gantry Core
//!
//! Core types shared by the Gantry GitHub client and the provisioning CLI.
//!
//! This crate contains:
//! - Domain types: repository scope and the runner records GitHub reports
//! - DTOs: request/response payloads of the runner endpoints

pub mod domain;
pub mod dto;
