use tracing_subscriber::EnvFilter;

use recboard_server::config::BoardConfig;
use recboard_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = BoardConfig::from_env()?;
    let bind_addr = config.bind_addr;
    tracing::info!(
        mode = ?config.mode,
        submissions_enabled = config.submissions_enabled,
        "starting recommendation board"
    );
    if config.mode.is_development() {
        tracing::warn!("development mode: access gate disabled");
    }

    let state = AppState::from_config(config)?;
    let app = recboard_server::router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
