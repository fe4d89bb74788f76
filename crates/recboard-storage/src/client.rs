use std::time::Duration;

use crate::error::StorageError;

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// OAuth2 client + refresh token for the account that owns the sheet.
#[derive(Clone)]
pub struct SheetsCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for SheetsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Where requests go. Production uses the Google endpoints; tests point both
/// at a local server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub api_base: String,
    pub token_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: SHEETS_API_BASE.to_string(),
            token_url: OAUTH_TOKEN_URL.to_string(),
        }
    }
}

/// Build the outbound HTTP client. Redirects are not followed.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, StorageError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| StorageError::Config(format!("failed to build HTTP client: {e}")))
}
