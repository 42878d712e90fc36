//! Admin authentication checks.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the preshared device deletion key.
pub const DEVICE_KEY_HEADER: &str = "x-device-key";

/// Require a valid `Authorization: Bearer <admin_secret>` header.
pub fn check_admin(headers: &HeaderMap, state: &AppState) -> Result<(), ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(token) if token == &*state.admin_secret => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

/// Require either the admin bearer token or, when configured, the
/// preshared device key in `x-device-key`.
pub fn check_admin_or_device(headers: &HeaderMap, state: &AppState) -> Result<(), ApiError> {
    if check_admin(headers, state).is_ok() {
        return Ok(());
    }

    if let Some(device_key) = &state.device_key {
        let presented = headers
            .get(DEVICE_KEY_HEADER)
            .and_then(|v| v.to_str().ok());
        if presented == Some(&**device_key) {
            return Ok(());
        }
    }

    Err(ApiError::Unauthorized)
}
