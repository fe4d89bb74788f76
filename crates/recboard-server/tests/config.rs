use std::collections::HashMap;
use std::time::Duration;

use recboard_server::config::{BoardConfig, ConfigError, RuntimeMode, StoreConfig};

fn load(pairs: &[(&str, &str)]) -> Result<BoardConfig, ConfigError> {
    let env: HashMap<&str, &str> = pairs.iter().copied().collect();
    BoardConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))
}

const SHEETS: &[(&str, &str)] = &[
    ("GOOGLE_SHEET_ID", "sheet"),
    ("GOOGLE_CLIENT_ID", "id"),
    ("GOOGLE_CLIENT_SECRET", "secret"),
    ("GOOGLE_REFRESH_TOKEN", "refresh"),
];

#[test]
fn defaults_apply_when_unset() {
    let config = load(SHEETS).unwrap();
    assert_eq!(config.mode, RuntimeMode::Production);
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
    assert!(config.auth.matches("members-only", "FF2025!"));
    assert!(config.submissions_enabled);
    match config.store {
        StoreConfig::Sheets {
            spreadsheet_id,
            timeout,
            ..
        } => {
            assert_eq!(spreadsheet_id, "sheet");
            assert_eq!(timeout, Duration::from_secs(15));
        }
        StoreConfig::Memory => panic!("expected sheets store"),
    }
}

#[test]
fn sheets_store_requires_credentials() {
    let err = load(&[("GOOGLE_SHEET_ID", "sheet")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("GOOGLE_CLIENT_ID")));

    let err = load(&[]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("GOOGLE_SHEET_ID")));
}

#[test]
fn memory_store_needs_no_credentials() {
    let config = load(&[("BOARD_STORE", "memory"), ("BOARD_ENV", "Development")]).unwrap();
    assert!(matches!(config.store, StoreConfig::Memory));
    assert!(config.mode.is_development());
}

#[test]
fn empty_values_count_as_unset() {
    let config = load(&[("BOARD_STORE", "memory"), ("BASIC_AUTH_PASSWORD", "")]).unwrap();
    assert_eq!(config.auth.password, "FF2025!");
}

#[test]
fn invalid_values_are_reported_with_their_key() {
    for (key, value) in [
        ("BOARD_ENV", "staging"),
        ("BOARD_STORE", "postgres"),
        ("BOARD_SUBMISSIONS_ENABLED", "maybe"),
        ("BOARD_BIND_ADDR", "nowhere"),
    ] {
        let err = load(&[("BOARD_STORE", "memory"), (key, value)]).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { key: k, .. } if k == key),
            "{key}"
        );
    }

    for timeout in ["soon", "0", " 0 ", "-5"] {
        let mut pairs = SHEETS.to_vec();
        pairs.push(("BOARD_STORE_TIMEOUT_SECS", timeout));
        assert!(
            matches!(
                load(&pairs).unwrap_err(),
                ConfigError::Invalid { key: "BOARD_STORE_TIMEOUT_SECS", .. }
            ),
            "{timeout:?}"
        );
    }
}

#[test]
fn submissions_toggle_parses_common_spellings() {
    for (value, expected) in [("false", false), ("0", false), ("off", false), ("TRUE", true), ("yes", true)] {
        let config = load(&[("BOARD_STORE", "memory"), ("BOARD_SUBMISSIONS_ENABLED", value)]).unwrap();
        assert_eq!(config.submissions_enabled, expected, "{value}");
    }
}

#[test]
fn debug_output_redacts_secrets() {
    let config = load(SHEETS).unwrap();
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("FF2025!"));
    assert!(!rendered.contains("refresh\""));
    assert!(!rendered.contains("\"secret\""));
}
