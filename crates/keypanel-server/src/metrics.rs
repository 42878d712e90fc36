//! Metrics instrumentation and Prometheus exporter.

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Initialize the Prometheus metrics exporter.
///
/// Starts an HTTP server on the given address to expose metrics.
pub fn init_prometheus(listen: &str) -> Result<(), String> {
    let addr: SocketAddr = listen
        .parse()
        .map_err(|e| format!("invalid metrics listen address: {}", e))?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("failed to install prometheus exporter: {}", e))?;

    Ok(())
}

// ── Metric names ──────────────────────────────────────────────────

/// Total logins by outcome (login, re_login, active, denied).
pub const LOGINS_TOTAL: &str = "keypanel_logins_total";
/// Total denied logins by reason.
pub const LOGIN_DENIED_TOTAL: &str = "keypanel_login_denied_total";
/// Total accounts created.
pub const ACCOUNTS_CREATED_TOTAL: &str = "keypanel_accounts_created_total";
/// Total renewals applied.
pub const ACCOUNTS_RENEWED_TOTAL: &str = "keypanel_accounts_renewed_total";
/// Total accounts deleted.
pub const ACCOUNTS_DELETED_TOTAL: &str = "keypanel_accounts_deleted_total";
/// Total client reactivations applied.
pub const ACCOUNTS_REACTIVATED_TOTAL: &str = "keypanel_accounts_reactivated_total";
/// Total API errors by type.
pub const ERRORS_TOTAL: &str = "keypanel_errors_total";

// ── Error type labels ─────────────────────────────────────────────

pub const ERROR_INPUT: &str = "input";
pub const ERROR_UNAUTHORIZED: &str = "unauthorized";
pub const ERROR_NOT_FOUND: &str = "not_found";
pub const ERROR_CONFLICT: &str = "conflict";
pub const ERROR_STORE: &str = "store";

// ── Recording functions ───────────────────────────────────────────

/// Record a login by outcome.
#[inline]
pub fn record_login(outcome: &'static str) {
    counter!(LOGINS_TOTAL, "outcome" => outcome).increment(1);
}

/// Record a denied login by reason.
#[inline]
pub fn record_login_denied(reason: &'static str) {
    counter!(LOGIN_DENIED_TOTAL, "reason" => reason).increment(1);
}

/// Record an account creation.
#[inline]
pub fn record_account_created() {
    counter!(ACCOUNTS_CREATED_TOTAL).increment(1);
}

/// Record a renewal.
#[inline]
pub fn record_account_renewed() {
    counter!(ACCOUNTS_RENEWED_TOTAL).increment(1);
}

/// Record an account deletion.
#[inline]
pub fn record_account_deleted() {
    counter!(ACCOUNTS_DELETED_TOTAL).increment(1);
}

/// Record a client reactivation.
#[inline]
pub fn record_account_reactivated() {
    counter!(ACCOUNTS_REACTIVATED_TOTAL).increment(1);
}

/// Record an API error by type.
#[inline]
pub fn record_error(error_type: &'static str) {
    counter!(ERRORS_TOTAL, "type" => error_type).increment(1);
}
