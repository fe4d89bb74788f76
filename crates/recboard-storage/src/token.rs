use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;

use crate::client::SheetsCredentials;
use crate::error::StorageError;

/// Refresh this long before the token's stated expiry.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

struct CachedToken {
    value: String,
    refresh_after: Instant,
}

/// Exchanges the refresh token for short-lived access tokens and reuses each
/// one until it is about to expire.
pub struct AccessTokenCache {
    http: reqwest::Client,
    token_url: String,
    credentials: SheetsCredentials,
    cached: Mutex<Option<CachedToken>>,
}

impl AccessTokenCache {
    pub fn new(http: reqwest::Client, token_url: String, credentials: SheetsCredentials) -> Self {
        Self {
            http,
            token_url,
            credentials,
            cached: Mutex::new(None),
        }
    }

    /// A valid bearer token, refreshing if needed.
    pub async fn access_token(&self) -> Result<String, StorageError> {
        let mut guard = self.cached.lock().await;
        if let Some(token) = guard.as_ref() {
            if Instant::now() < token.refresh_after {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.refresh().await?;
        let lifetime = Duration::from_secs(fresh.expires_in).saturating_sub(EXPIRY_MARGIN);
        tracing::debug!(expires_in = fresh.expires_in, "refreshed sheets access token");
        *guard = Some(CachedToken {
            value: fresh.access_token.clone(),
            refresh_after: Instant::now() + lifetime,
        });
        Ok(fresh.access_token)
    }

    async fn refresh(&self) -> Result<TokenResponse, StorageError> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let resp = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| StorageError::TokenRefresh(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StorageError::TokenRefresh(format!("{status}: {body}")));
        }

        resp.json::<TokenResponse>()
            .await
            .map_err(|e| StorageError::TokenRefresh(e.to_string()))
    }
}
