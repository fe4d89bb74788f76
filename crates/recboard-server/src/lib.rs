//! recboard-server
//!
//! HTTP surface of the recommendation board: the JSON API, the rendered
//! board page, and the shared-password gate in front of it.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full router. The gate runs before routing so unknown paths are
/// challenged too.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Board page (gated)
        .route("/", get(routes::board::board_page))
        .route("/board", post(routes::board::submit_form))
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // API (no auth, like the assets)
        .route(
            "/api/recommendations",
            get(routes::recommendations::list_recommendations)
                .post(routes::recommendations::create_recommendation)
                .put(routes::recommendations::update_recommendation),
        )
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::basic_auth,
        ))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
