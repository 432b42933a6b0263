//! Runners repository
//!
//! Handles communication with GitHub for runner-related operations:
//! - Listing the repository's runners
//! - Creating registration tokens
//! - Deleting runner registrations

use async_trait::async_trait;
use gantry_client::{GitHubClient, Result};
use gantry_core::domain::repo::RepoContext;
use gantry_core::domain::runner::Runner;
use gantry_core::dto::runner::RegistrationToken;

/// Repository trait for the runner endpoints of one repository scope
#[async_trait]
pub trait RunnerRepository: Send + Sync {
    /// Lists every runner registered with the repository, across all pages
    ///
    /// # Arguments
    /// * `ctx` - The repository scope
    async fn list_runners(&self, ctx: &RepoContext) -> Result<Vec<Runner>>;

    /// Creates a short-lived token a new runner registers itself with
    async fn create_registration_token(&self, ctx: &RepoContext) -> Result<RegistrationToken>;

    /// Deletes a runner registration by its GitHub id
    ///
    /// # Arguments
    /// * `ctx` - The repository scope
    /// * `runner_id` - Identifier assigned by GitHub
    async fn delete_runner(&self, ctx: &RepoContext, runner_id: u64) -> Result<()>;
}

#[async_trait]
impl RunnerRepository for GitHubClient {
    async fn list_runners(&self, ctx: &RepoContext) -> Result<Vec<Runner>> {
        self.list_repo_runners(ctx).await
    }

    async fn create_registration_token(&self, ctx: &RepoContext) -> Result<RegistrationToken> {
        GitHubClient::create_registration_token(self, ctx).await
    }

    async fn delete_runner(&self, ctx: &RepoContext, runner_id: u64) -> Result<()> {
        self.delete_repo_runner(ctx, runner_id).await
    }
}
