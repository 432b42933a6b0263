//! In-memory runner repository for tests
//!
//! Lookups are served from a queue of scripted responses; once the queue is
//! drained the last configured runner list is returned on every call. Calls
//! are recorded so tests can assert on them.

use async_trait::async_trait;
use chrono::Utc;
use gantry_client::{ClientError, Result};
use gantry_core::domain::repo::RepoContext;
use gantry_core::domain::runner::{Runner, RunnerLabel, RunnerStatus};
use gantry_core::dto::runner::RegistrationToken;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::RunnerRepository;

#[derive(Default)]
pub struct InMemoryRunnerRepository {
    scripted: Mutex<VecDeque<Result<Vec<Runner>>>>,
    runners: Mutex<Vec<Runner>>,
    token_error: Mutex<Option<ClientError>>,
    delete_error: Mutex<Option<ClientError>>,
    list_calls: AtomicUsize,
    token_calls: AtomicUsize,
    deleted: Mutex<Vec<u64>>,
}

impl InMemoryRunnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runners returned once the scripted responses run out
    pub fn with_runners(self, runners: Vec<Runner>) -> Self {
        *self.runners.lock().unwrap() = runners;
        self
    }

    /// Queues one response for the next lookup
    pub fn then_list(self, response: Result<Vec<Runner>>) -> Self {
        self.scripted.lock().unwrap().push_back(response);
        self
    }

    pub fn failing_token(self, error: ClientError) -> Self {
        *self.token_error.lock().unwrap() = Some(error);
        self
    }

    pub fn failing_delete(self, error: ClientError) -> Self {
        *self.delete_error.lock().unwrap() = Some(error);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn deleted(&self) -> Vec<u64> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl RunnerRepository for InMemoryRunnerRepository {
    async fn list_runners(&self, _ctx: &RepoContext) -> Result<Vec<Runner>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        match self.scripted.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(self.runners.lock().unwrap().clone()),
        }
    }

    async fn create_registration_token(&self, _ctx: &RepoContext) -> Result<RegistrationToken> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);

        match self.token_error.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(RegistrationToken {
                token: "AABF3JGZDX3P5PMEXLND6TS6FCWO6".to_string(),
                expires_at: Utc::now() + chrono::Duration::hours(1),
            }),
        }
    }

    async fn delete_runner(&self, _ctx: &RepoContext, runner_id: u64) -> Result<()> {
        if let Some(error) = self.delete_error.lock().unwrap().take() {
            return Err(error);
        }

        self.deleted.lock().unwrap().push(runner_id);
        Ok(())
    }
}

/// Builds a runner carrying a single custom label
pub fn runner(id: u64, name: &str, label: &str, status: RunnerStatus) -> Runner {
    Runner {
        id,
        name: name.to_string(),
        os: "linux".to_string(),
        status,
        busy: false,
        labels: vec![RunnerLabel::custom(label)],
    }
}
