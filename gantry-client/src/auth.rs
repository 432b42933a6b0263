//! GitHub App authentication
//!
//! Requests are authenticated with an installation access token. The token is
//! obtained by signing a short-lived app JWT with the app's private key and
//! exchanging it at `/app/installations/{id}/access_tokens`. Tokens are cached
//! until shortly before they expire.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Backdating applied to `iat` to absorb clock drift
const JWT_BACKDATE_SECS: i64 = 60;

/// GitHub rejects app JWTs valid for more than ten minutes
const JWT_LIFETIME_SECS: i64 = 9 * 60;

/// Cached tokens are refreshed once less than this much validity remains
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Static identity of a GitHub App installation
#[derive(Clone)]
pub struct AppCredentials {
    /// Numeric GitHub App id
    pub app_id: u64,

    /// PEM-encoded RSA private key of the app
    pub private_key: String,

    /// Installation of the app on the target account
    pub installation_id: u64,
}

impl AppCredentials {
    pub fn new(app_id: u64, private_key: impl Into<String>, installation_id: u64) -> Self {
        Self {
            app_id,
            private_key: private_key.into(),
            installation_id,
        }
    }
}

impl std::fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCredentials")
            .field("app_id", &self.app_id)
            .field("private_key", &"<redacted>")
            .field("installation_id", &self.installation_id)
            .finish()
    }
}

/// Claims of the app JWT
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct AppClaims {
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

impl AppClaims {
    fn issued_at(app_id: u64, now: DateTime<Utc>) -> Self {
        Self {
            iat: now.timestamp() - JWT_BACKDATE_SECS,
            exp: now.timestamp() + JWT_LIFETIME_SECS,
            iss: app_id.to_string(),
        }
    }
}

/// Installation access token as returned by GitHub
#[derive(Clone, Deserialize)]
struct InstallationToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl InstallationToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - now > ChronoDuration::seconds(TOKEN_REFRESH_MARGIN_SECS)
    }
}

/// Signs app JWTs and keeps the current installation token
pub(crate) struct AppAuth {
    credentials: AppCredentials,
    cached: Mutex<Option<InstallationToken>>,
}

impl AppAuth {
    pub(crate) fn new(credentials: AppCredentials) -> Self {
        Self {
            credentials,
            cached: Mutex::new(None),
        }
    }

    /// Auth whose cache already holds a valid installation token
    #[cfg(test)]
    pub(crate) fn with_token(credentials: AppCredentials, token: &str) -> Self {
        Self {
            credentials,
            cached: Mutex::new(Some(InstallationToken {
                token: token.to_string(),
                expires_at: Utc::now() + ChronoDuration::hours(1),
            })),
        }
    }

    pub(crate) fn credentials(&self) -> &AppCredentials {
        &self.credentials
    }

    /// Signs an app JWT valid from `now`
    pub(crate) fn app_jwt(&self, now: DateTime<Utc>) -> Result<String> {
        let key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())
            .map_err(|e| ClientError::Auth(format!("invalid app private key: {}", e)))?;

        let claims = AppClaims::issued_at(self.credentials.app_id, now);
        encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| ClientError::Auth(format!("failed to sign app JWT: {}", e)))
    }

    /// Returns a valid installation token, exchanging a new one if needed
    ///
    /// The lock is held across the exchange so concurrent callers share one
    /// request.
    pub(crate) async fn installation_token(&self, http: &Client, api_url: &str) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = (*cached).as_ref().filter(|t| t.is_fresh(Utc::now())) {
            return Ok(token.token.clone());
        }

        debug!(
            "Exchanging app JWT for an installation token (installation {})",
            self.credentials.installation_id
        );

        let url = format!(
            "{}/app/installations/{}/access_tokens",
            api_url, self.credentials.installation_id
        );
        let jwt = self.app_jwt(Utc::now())?;

        let response = http
            .post(&url)
            .bearer_auth(jwt)
            .header(reqwest::header::ACCEPT, crate::ACCEPT_GITHUB_JSON)
            .header(crate::API_VERSION_HEADER, crate::API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Auth(format!(
                "installation token exchange failed (status {}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let token: InstallationToken = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse installation token: {}", e))
        })?;

        let value = token.token.clone();
        *cached = Some(token);
        Ok(value)
    }
}
