//! Runner domain model
//!
//! Represents a self-hosted runner as GitHub reports it.

use serde::{Deserialize, Serialize};

/// A self-hosted runner registered with the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    /// Identifier assigned by GitHub
    pub id: u64,

    /// Runner name chosen at registration
    pub name: String,

    /// Operating system reported by the runner
    #[serde(default)]
    pub os: String,

    /// Current connection status
    pub status: RunnerStatus,

    /// Whether the runner is executing a job
    #[serde(default)]
    pub busy: bool,

    /// Labels attached to the runner
    #[serde(default)]
    pub labels: Vec<RunnerLabel>,
}

impl Runner {
    /// Returns true if one of the runner's labels is exactly `label`
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.name == label)
    }

    /// Returns true if GitHub reports the runner as online
    pub fn is_online(&self) -> bool {
        self.status == RunnerStatus::Online
    }
}

/// A label attached to a runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub name: String,

    /// `read-only` for labels GitHub assigns, `custom` otherwise
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl RunnerLabel {
    /// Creates a custom label with the given name
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: Some("custom".to_string()),
        }
    }
}

/// Status of a runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerStatus {
    /// Runner is connected and can pick up jobs
    Online,

    /// Runner is not connected
    Offline,

    /// Any status this crate does not know about
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for RunnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerStatus::Online => write!(f, "online"),
            RunnerStatus::Offline => write!(f, "offline"),
            RunnerStatus::Unknown => write!(f, "unknown"),
        }
    }
}
