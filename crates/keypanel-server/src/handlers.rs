//! Route handlers.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tracing::info;

use keypanel_engine::LoginOutcome;

use crate::auth::{check_admin, check_admin_or_device};
use crate::error::ApiError;
use crate::extract::Payload;
use crate::metrics;
use crate::state::AppState;
use crate::types::*;

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// POST /login — client login and entitlement check.
///
/// Denials come back as HTTP 200 with a `fail` status; only transport
/// and input problems surface as error statuses.
pub async fn login(
    State(state): State<AppState>,
    Payload(req): Payload<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state
        .engine
        .login(&req.user, &req.password, req.device_id.as_deref())
        .await?;

    let body = match outcome {
        LoginOutcome::FirstLogin {
            username,
            days_left,
            ..
        } => {
            metrics::record_login("login");
            json!({
                "status": "login",
                "user": username,
                "expired_date": days_left.to_string(),
            })
        }
        LoginOutcome::Active {
            username,
            days_left,
        } => {
            metrics::record_login("login");
            json!({
                "status": "login",
                "user": username,
                "expired_date": days_left.to_string(),
            })
        }
        LoginOutcome::ReLogin {
            username,
            expires_at_ms,
            ..
        } => {
            metrics::record_login("re_login");
            json!({
                "status": "re_login",
                "user": username,
                "expired_date": expires_at_ms.to_string(),
            })
        }
        LoginOutcome::Denied(denied) => {
            metrics::record_login("denied");
            metrics::record_login_denied(denied.reason());
            json!({
                "status": "fail",
                "message": denied.reason(),
            })
        }
    };

    Ok(Json(body))
}

/// POST /exist — existence and liveness check.
pub async fn exist(
    State(state): State<AppState>,
    Payload(req): Payload<ExistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let body = match state.engine.check(&req.user).await? {
        Some(status) => json!({
            "status": "ok",
            "exists": true,
            "user": status.username,
            "active": status.active,
            "expires_at": status.expires_at,
            "created_at": status.created_at,
        }),
        None => json!({
            "status": "ok",
            "exists": false,
        }),
    };
    Ok(Json(body))
}

/// POST /reactivate — client-driven device and expiry resynchronization.
pub async fn reactivate(
    State(state): State<AppState>,
    Payload(req): Payload<ReactivateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .engine
        .reactivate(&req.user, &req.device_id, req.expired_date)
        .await?;

    metrics::record_account_reactivated();
    Ok(Json(json!({
        "status": "reactivate",
        "user": record.username,
        "expires_at": record.expires_at,
    })))
}

/// POST /admin/create
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(req): Payload<CreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    check_admin(&headers, &state)?;

    let record = state
        .engine
        .create(&req.user, &req.password, req.days)
        .await?;

    metrics::record_account_created();
    Ok(Json(json!({
        "status": "create",
        "user": record.username,
        "trial_days": record.trial_days,
        "expires_at": record.expires_at,
    })))
}

/// POST /admin/renew
pub async fn renew(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(req): Payload<RenewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    check_admin(&headers, &state)?;

    let outcome = state.engine.renew(&req.user, req.days).await?;

    metrics::record_account_renewed();
    Ok(Json(json!({
        "status": "renew",
        "user": outcome.username,
        "trial_days": outcome.trial_days,
        "expires_at": outcome.expires_at,
    })))
}

/// POST /admin/delete
///
/// Accepts the admin bearer token or, when configured, the preshared
/// `x-device-key` header so a device can remove its own account.
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(req): Payload<DeleteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    check_admin_or_device(&headers, &state)?;

    let deleted = state.engine.delete(&req.user).await?;
    if deleted > 0 {
        metrics::record_account_deleted();
    }

    Ok(Json(json!({
        "status": "delete",
        "deleted": deleted,
    })))
}

/// GET|POST /admin/list
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    check_admin(&headers, &state)?;

    let accounts = state.engine.list().await?;
    info!(count = accounts.len(), "listed accounts");
    Ok(Json(accounts))
}

/// GET /admin/version
pub async fn version(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    check_admin(&headers, &state)?;
    Ok(Json(json!({ "version": env!("CARGO_PKG_VERSION") })))
}
