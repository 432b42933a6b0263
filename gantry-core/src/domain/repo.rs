//! Repository scope
//!
//! Every runner API call is made against one `owner/repo` pair.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The `(owner, repo)` pair identifying where runners are registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoContext {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,
}

impl RepoContext {
    /// Creates a context from its two halves
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Path prefix for the repository's runner endpoints
    pub fn runners_path(&self) -> String {
        format!("/repos/{}/{}/actions/runners", self.owner, self.repo)
    }
}

/// Error returned when an `owner/repo` string is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRepoContextError(String);

impl fmt::Display for ParseRepoContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected repository as 'owner/repo', got '{}'", self.0)
    }
}

impl std::error::Error for ParseRepoContextError {}

impl FromStr for RepoContext {
    type Err = ParseRepoContextError;

    /// Parses the `owner/repo` form used by `GITHUB_REPOSITORY`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Self::new(owner, repo))
            }
            _ => Err(ParseRepoContextError(s.to_string())),
        }
    }
}

impl fmt::Display for RepoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_repo() {
        let ctx: RepoContext = "octo-org/octo-repo".parse().unwrap();
        assert_eq!(ctx.owner, "octo-org");
        assert_eq!(ctx.repo, "octo-repo");
        assert_eq!(ctx.to_string(), "octo-org/octo-repo");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("octo-org".parse::<RepoContext>().is_err());
        assert!("octo-org/".parse::<RepoContext>().is_err());
        assert!("/octo-repo".parse::<RepoContext>().is_err());
        assert!("a/b/c".parse::<RepoContext>().is_err());
    }

    #[test]
    fn test_runners_path() {
        let ctx = RepoContext::new("octo-org", "octo-repo");
        assert_eq!(ctx.runners_path(), "/repos/octo-org/octo-repo/actions/runners");
    }
}
