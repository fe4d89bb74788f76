//! Process configuration, read from the environment once at startup.
//!
//! Nothing else in the server looks at environment variables; the resulting
//! [`BoardConfig`] is shared through [`crate::state::AppState`].

use std::net::SocketAddr;
use std::time::Duration;

use recboard_storage::client::SheetsCredentials;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_AUTH_USER: &str = "members-only";
pub const DEFAULT_AUTH_PASSWORD: &str = "FF2025!";
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    pub fn is_development(self) -> bool {
        self == RuntimeMode::Development
    }
}

/// The single shared login for the board.
#[derive(Clone)]
pub struct BasicAuthCredentials {
    pub username: String,
    pub password: String,
}

impl BasicAuthCredentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl std::fmt::Debug for BasicAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Process-local sheet preloaded with the seed collection.
    Memory,
    Sheets {
        spreadsheet_id: String,
        credentials: SheetsCredentials,
        timeout: Duration,
    },
}

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub mode: RuntimeMode,
    pub bind_addr: SocketAddr,
    pub auth: BasicAuthCredentials,
    /// When false, POST and PUT answer 403 without touching the store.
    pub submissions_enabled: bool,
    pub store: StoreConfig,
}

impl BoardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let mode = match get("BOARD_ENV").as_deref().map(str::trim) {
            None => RuntimeMode::Production,
            Some(v) if v.eq_ignore_ascii_case("production") => RuntimeMode::Production,
            Some(v) if v.eq_ignore_ascii_case("development") => RuntimeMode::Development,
            Some(v) => {
                return Err(ConfigError::Invalid {
                    key: "BOARD_ENV",
                    value: v.to_string(),
                })
            }
        };

        let bind_raw = get("BOARD_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key: "BOARD_BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let auth = BasicAuthCredentials {
            username: get("BASIC_AUTH_USER").unwrap_or_else(|| DEFAULT_AUTH_USER.to_string()),
            password: get("BASIC_AUTH_PASSWORD")
                .unwrap_or_else(|| DEFAULT_AUTH_PASSWORD.to_string()),
        };

        let submissions_enabled = match get("BOARD_SUBMISSIONS_ENABLED") {
            None => true,
            Some(v) => parse_bool("BOARD_SUBMISSIONS_ENABLED", &v)?,
        };

        let store = match get("BOARD_STORE").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("memory") => StoreConfig::Memory,
            None => sheets_config(&require, &get)?,
            Some(v) if v.eq_ignore_ascii_case("sheets") => sheets_config(&require, &get)?,
            Some(v) => {
                return Err(ConfigError::Invalid {
                    key: "BOARD_STORE",
                    value: v.to_string(),
                })
            }
        };

        Ok(Self {
            mode,
            bind_addr,
            auth,
            submissions_enabled,
            store,
        })
    }
}

fn sheets_config(
    require: &impl Fn(&'static str) -> Result<String, ConfigError>,
    get: &impl Fn(&str) -> Option<String>,
) -> Result<StoreConfig, ConfigError> {
    // A zero timeout would fail every store request immediately.
    let timeout_secs = match get("BOARD_STORE_TIMEOUT_SECS") {
        None => DEFAULT_STORE_TIMEOUT_SECS,
        Some(v) => match v.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                return Err(ConfigError::Invalid {
                    key: "BOARD_STORE_TIMEOUT_SECS",
                    value: v,
                });
            }
        },
    };

    Ok(StoreConfig::Sheets {
        spreadsheet_id: require("GOOGLE_SHEET_ID")?,
        credentials: SheetsCredentials {
            client_id: require("GOOGLE_CLIENT_ID")?,
            client_secret: require("GOOGLE_CLIENT_SECRET")?,
            refresh_token: require("GOOGLE_REFRESH_TOKEN")?,
        },
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}
