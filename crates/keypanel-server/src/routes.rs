//! Router assembly.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/login", post(handlers::login))
        .route("/exist", post(handlers::exist))
        .route("/reactivate", post(handlers::reactivate))
        .route("/admin/create", post(handlers::create))
        .route("/admin/renew", post(handlers::renew))
        .route("/admin/delete", post(handlers::delete))
        .route("/admin/list", get(handlers::list).post(handlers::list))
        .route("/admin/version", get(handlers::version))
        // Device clients call from app webviews; allow cross-origin use.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
