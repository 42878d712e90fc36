//! HTTP API server for keypanel account management.
//!
//! Exposes the client-facing endpoints (`/login`, `/exist`,
//! `/reactivate`) and the secret-gated `/admin` management surface over
//! the entitlement engine. Entry points: [`cli::run`] for the binary,
//! [`run_with_shutdown`] for embedding.

pub mod auth;
pub mod cli;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod types;

use tracing::info;

pub use tokio_util::sync::CancellationToken;

pub use error::ApiError;
pub use state::AppState;

/// Run the API server until the shutdown token is cancelled.
pub async fn run_with_shutdown(
    config: keypanel_config::Config,
    shutdown: CancellationToken,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::from_config(&config).await?;
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    info!("api server listening on {}", config.server.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("api server stopped");
    Ok(())
}
