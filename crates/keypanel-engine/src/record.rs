//! Account record and derived views.

use serde::{Deserialize, Serialize};

pub const SECS_PER_DAY: i64 = 86_400;

/// One stored account, keyed by normalized username.
///
/// Exactly one of `trial_days` / `expires_at` drives remaining-time
/// computation: once `expires_at` is set it is authoritative and
/// `trial_days` is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Storage key: trimmed, lowercased username.
    pub username: String,
    /// SHA224 hex digest of the shared secret. Never logged.
    pub password_digest: String,
    /// Creation timestamp (epoch seconds), independent of activation.
    pub created_at: i64,
    /// Days granted but not yet converted into an expiry (deferred policy).
    pub trial_days: Option<i64>,
    /// Absolute expiry (epoch seconds). `None` = window not started.
    pub expires_at: Option<i64>,
    /// Device id captured at the binding login.
    pub bound_device: Option<String>,
}

impl AccountRecord {
    /// Whether the entitlement window has started.
    #[inline]
    pub fn is_activated(&self) -> bool {
        self.expires_at.is_some()
    }

    /// Whether the account is expired at `now`.
    ///
    /// The boundary second counts as expired; an unactivated account
    /// never does.
    #[inline]
    pub fn is_expired(&self, now: i64) -> bool {
        matches!(self.expires_at, Some(exp) if now >= exp)
    }

    /// Remaining whole days at `now`, rounded up and floored at 1.
    ///
    /// Only meaningful for activated, non-expired accounts.
    #[inline]
    pub fn days_left(&self, now: i64) -> i64 {
        match self.expires_at {
            Some(exp) if exp > now => ((exp - now) + SECS_PER_DAY - 1) / SECS_PER_DAY,
            _ => 1,
        }
    }
}

/// Existence-check view returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct AccountStatus {
    pub username: String,
    /// `true` when not expired; a not-yet-started window counts as active.
    pub active: bool,
    pub expires_at: Option<i64>,
    pub created_at: i64,
}

/// Admin listing view.
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub username: String,
    pub created_at: i64,
    pub trial_days: Option<i64>,
    pub expires_at: Option<i64>,
    pub expired: bool,
}
