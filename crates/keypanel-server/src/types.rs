//! Wire types for the API.

use serde::Deserialize;

// Client-facing requests (JSON or form-encoded).

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub password: String,
    #[serde(default)]
    pub device_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExistRequest {
    pub user: String,
}

#[derive(Debug, Deserialize)]
pub struct ReactivateRequest {
    pub user: String,
    pub device_id: String,
    /// Client-computed absolute expiry in unix milliseconds.
    pub expired_date: i64,
}

// Admin requests (JSON).

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub user: String,
    pub password: String,
    pub days: i64,
}

#[derive(Debug, Deserialize)]
pub struct RenewRequest {
    pub user: String,
    pub days: i64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub user: String,
}
