use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::state::AppState;

/// Paths served without a login: the JSON API, health check and static assets.
const OPEN_PREFIXES: &[&str] = &["/api", "/health", "/static/"];
const OPEN_FILES: &[&str] = &["/favicon.ico", "/logo.png", "/logo-full.png"];

/// Shared-password gate in front of every page.
///
/// Skipped entirely in development mode. Otherwise the request must carry
/// `Authorization: Basic <base64(user:password)>` matching the configured
/// pair, or it gets a 401 challenge.
pub async fn basic_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if state.config.mode.is_development() || !is_protected(req.uri().path()) {
        return next.run(req).await;
    }

    let authorized = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(decode_basic)
        .is_some_and(|(user, password)| state.config.auth.matches(&user, &password));

    if authorized {
        next.run(req).await
    } else {
        tracing::debug!(path = %req.uri().path(), "rejected unauthenticated request");
        challenge()
    }
}

pub fn is_protected(path: &str) -> bool {
    !(OPEN_PREFIXES.iter().any(|p| path.starts_with(p)) || OPEN_FILES.iter().any(|f| *f == path))
}

/// Decode a Basic credential into `(user, password)`. The password keeps any
/// further colons.
pub fn decode_basic(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (user, password) = text.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

fn challenge() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(WWW_AUTHENTICATE, "Basic realm=\"Secure Area\"")],
        "Authentication required",
    )
        .into_response()
}
