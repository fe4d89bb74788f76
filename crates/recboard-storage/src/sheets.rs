use std::time::Duration;

use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};

use recboard_core::sheet_layout::CellRange;

use crate::client::{self, Endpoints, SheetsCredentials};
use crate::error::StorageError;
use crate::store::{BoxFuture, Rows, TabularStore};
use crate::token::AccessTokenCache;

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    range: String,
    major_dimension: &'static str,
    values: &'a Rows,
}

/// Google Sheets v4 values API, authenticated with a refreshed OAuth2 token.
pub struct SheetsStore {
    http: reqwest::Client,
    api_base: String,
    spreadsheet_id: String,
    tokens: AccessTokenCache,
}

impl SheetsStore {
    pub fn new(
        spreadsheet_id: impl Into<String>,
        credentials: SheetsCredentials,
        timeout: Duration,
    ) -> Result<Self, StorageError> {
        Self::with_endpoints(spreadsheet_id, credentials, timeout, Endpoints::default())
    }

    pub fn with_endpoints(
        spreadsheet_id: impl Into<String>,
        credentials: SheetsCredentials,
        timeout: Duration,
        endpoints: Endpoints,
    ) -> Result<Self, StorageError> {
        let spreadsheet_id = spreadsheet_id.into();
        if spreadsheet_id.trim().is_empty() {
            return Err(StorageError::Config("spreadsheet id is empty".to_string()));
        }
        let http = client::build_client(timeout)?;
        let tokens = AccessTokenCache::new(http.clone(), endpoints.token_url, credentials);
        Ok(Self {
            http,
            api_base: endpoints.api_base,
            spreadsheet_id,
            tokens,
        })
    }

    /// `{base}/{spreadsheet}/values/{range}{suffix}`
    fn values_url(&self, range: &CellRange, suffix: &str) -> Result<Url, StorageError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| StorageError::Config(format!("invalid Sheets API base: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| StorageError::Config("Sheets API base cannot carry a path".to_string()))?
            .pop_if_empty()
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&format!("{range}{suffix}"));
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        query: &[(&str, &str)],
        body: Option<&ValueRangeBody<'_>>,
    ) -> Result<reqwest::Response, StorageError> {
        let token = self.tokens.access_token().await?;
        let mut req = self
            .http
            .request(method, url)
            .bearer_auth(token)
            .query(query);
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StorageError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }
}

/// Formatted values come back as strings; anything else is stringified.
fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl TabularStore for SheetsStore {
    fn get_values<'a>(&'a self, range: &'a CellRange) -> BoxFuture<'a, Result<Rows, StorageError>> {
        Box::pin(async move {
            let url = self.values_url(range, "")?;
            let resp = self.send(Method::GET, url, &[], None).await?;
            let body = resp.bytes().await?;
            let parsed: ValueRange = serde_json::from_slice(&body)?;
            Ok(parsed
                .values
                .into_iter()
                .map(|row| row.into_iter().map(cell_to_string).collect())
                .collect())
        })
    }

    fn append_values<'a>(
        &'a self,
        range: &'a CellRange,
        rows: Rows,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let url = self.values_url(range, ":append")?;
            let body = ValueRangeBody {
                range: range.to_string(),
                major_dimension: "ROWS",
                values: &rows,
            };
            self.send(
                Method::POST,
                url,
                &[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")],
                Some(&body),
            )
            .await?;
            tracing::debug!(range = %range, rows = rows.len(), "appended rows");
            Ok(())
        })
    }

    fn update_values<'a>(
        &'a self,
        range: &'a CellRange,
        rows: Rows,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let url = self.values_url(range, "")?;
            let body = ValueRangeBody {
                range: range.to_string(),
                major_dimension: "ROWS",
                values: &rows,
            };
            self.send(Method::PUT, url, &[("valueInputOption", "RAW")], Some(&body))
                .await?;
            tracing::debug!(range = %range, "updated rows");
            Ok(())
        })
    }
}
