//! The entitlement state machine.
//!
//! [`EntitlementEngine`] wraps an [`AccountStore`] and owns every account
//! lifecycle transition: creation, renewal, first-login activation, device
//! binding, client-driven reactivation, and lazy expiry evaluation. Expiry
//! is never swept in the background; it is checked on each read.
//!
//! Mutating operations are a non-atomic get-then-put against the store, so
//! concurrent writes to the same username are last-write-wins on the full
//! record. Accepted: each account belongs to a single end-user, and the
//! store round trip is the unit of failure.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

use crate::config::{ActivationPolicy, DeviceBinding, EngineConfig};
use crate::error::EngineError;
use crate::hash::{digest_matches, sha224_hex};
use crate::record::{AccountRecord, AccountStatus, AccountSummary, SECS_PER_DAY};
use crate::store::AccountStore;

/// Why a login was denied.
///
/// Denials are domain outcomes, not errors: the HTTP layer reports them
/// with a `fail` status so clients can distinguish them from transport
/// problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginDenied {
    UserNotFound,
    WrongPassword,
    Expired,
    /// Re-login presented a device id different from the bound one
    /// (enforced binding only).
    DeviceConflict,
}

impl LoginDenied {
    /// Stable reason string reported to clients.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UserNotFound => "user_not_found",
            Self::WrongPassword => "wrong_password",
            Self::Expired => "expired",
            Self::DeviceConflict => "device_conflict",
        }
    }
}

/// Successful or denied login classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Device-binding login: the presented device id was just bound.
    FirstLogin {
        username: String,
        days_left: i64,
        device: String,
    },
    /// Login on an already-bound account. Carries the absolute expiry in
    /// milliseconds (the unit agreed with clients) and the bound device.
    ReLogin {
        username: String,
        expires_at_ms: i64,
        device: String,
    },
    /// Flat success: binding disabled, or no device id presented.
    Active { username: String, days_left: i64 },
    /// Login rejected; the stored record was not mutated by the denial.
    Denied(LoginDenied),
}

/// Result of a renewal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewOutcome {
    pub username: String,
    /// New absolute expiry, if the account is activated.
    pub expires_at: Option<i64>,
    /// Accumulated pre-activation days, if it is not.
    pub trial_days: Option<i64>,
}

/// Account lifecycle engine over a pluggable store.
#[derive(Debug)]
pub struct EntitlementEngine<S: AccountStore> {
    store: S,
    config: EngineConfig,
}

impl<S: AccountStore> EntitlementEngine<S> {
    /// Create an engine over the given store.
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create an account.
    ///
    /// Under the immediate policy the expiry is fixed here; under the
    /// deferred policy the granted days wait for the first login.
    pub async fn create(
        &self,
        username: &str,
        password: &str,
        days: i64,
    ) -> Result<AccountRecord, EngineError> {
        self.create_at(username, password, days, now_unix()).await
    }

    /// Extend an account by `days`.
    pub async fn renew(&self, username: &str, days: i64) -> Result<RenewOutcome, EngineError> {
        self.renew_at(username, days, now_unix()).await
    }

    /// Authenticate and classify a login. See [`LoginOutcome`].
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        device_id: Option<&str>,
    ) -> Result<LoginOutcome, EngineError> {
        self.login_at(username, password, device_id, now_unix()).await
    }

    /// Existence/liveness check. `None` when the account is absent.
    ///
    /// Clients use the `active` flag to self-clean stale local state; the
    /// engine never deletes on expiry.
    pub async fn check(&self, username: &str) -> Result<Option<AccountStatus>, EngineError> {
        self.check_at(username, now_unix()).await
    }

    /// Client-authoritative resynchronization: overwrite the bound device
    /// and the expiry from a client-computed absolute timestamp.
    ///
    /// Trust boundary: after first activation the device is the source of
    /// truth for its own locally-computed expiry, tolerating client clock
    /// and timezone skew. A hostile client holding valid credentials can
    /// extend itself; this is a deliberate, documented weakening of server
    /// authority.
    pub async fn reactivate(
        &self,
        username: &str,
        device_id: &str,
        expiry_millis: i64,
    ) -> Result<AccountRecord, EngineError> {
        if expiry_millis <= 0 {
            return Err(EngineError::invalid("expiry must be positive"));
        }
        let key = normalize(username)?;
        let mut record = self.store.get(&key).await?.ok_or(EngineError::NotFound)?;

        record.bound_device = Some(device_id.to_owned());
        record.expires_at = Some(expiry_millis / 1000);
        self.store.put(&record).await?;

        info!(username = %key, "account reactivated from client state");
        Ok(record)
    }

    /// Remove an account. Idempotent; returns the number removed (0 or 1).
    pub async fn delete(&self, username: &str) -> Result<u64, EngineError> {
        let key = normalize(username)?;
        let removed = self.store.delete(&key).await?;
        if removed {
            info!(username = %key, "account deleted");
        }
        Ok(u64::from(removed))
    }

    /// Enumerate all accounts with derived expiry flags.
    pub async fn list(&self) -> Result<Vec<AccountSummary>, EngineError> {
        let now = now_unix();
        let records = self.store.list().await?;
        Ok(records
            .into_iter()
            .map(|r| AccountSummary {
                expired: r.is_expired(now),
                username: r.username,
                created_at: r.created_at,
                trial_days: r.trial_days,
                expires_at: r.expires_at,
            })
            .collect())
    }

    // ── Clock-explicit variants (unit tested) ─────────────────────────

    async fn create_at(
        &self,
        username: &str,
        password: &str,
        days: i64,
        now: i64,
    ) -> Result<AccountRecord, EngineError> {
        let key = normalize(username)?;
        if password.trim().is_empty() {
            return Err(EngineError::invalid("password must not be empty"));
        }
        check_days(days)?;

        if self.store.get(&key).await?.is_some() {
            return Err(EngineError::AlreadyExists);
        }

        let (trial_days, expires_at) = match self.config.activation {
            ActivationPolicy::Immediate => (None, Some(now + days * SECS_PER_DAY)),
            ActivationPolicy::Deferred => (Some(days), None),
        };

        let record = AccountRecord {
            username: key.clone(),
            password_digest: sha224_hex(password),
            created_at: now,
            trial_days,
            expires_at,
            bound_device: None,
        };
        self.store.put(&record).await?;

        info!(username = %key, days, activation = ?self.config.activation, "account created");
        Ok(record)
    }

    async fn renew_at(
        &self,
        username: &str,
        days: i64,
        now: i64,
    ) -> Result<RenewOutcome, EngineError> {
        let key = normalize(username)?;
        check_days(days)?;

        let mut record = self.store.get(&key).await?.ok_or(EngineError::NotFound)?;

        match record.expires_at {
            // Window not started: extension accumulates pre-activation.
            None => {
                record.trial_days = Some(record.trial_days.unwrap_or(0) + days);
            }
            // A lapsed window restarts from now, so the renewal always
            // grants a full `days` of future access.
            Some(exp) => {
                record.expires_at = Some(exp.max(now) + days * SECS_PER_DAY);
            }
        }
        self.store.put(&record).await?;

        info!(username = %key, days, expires_at = ?record.expires_at, "account renewed");
        Ok(RenewOutcome {
            username: key,
            expires_at: record.expires_at,
            trial_days: record.trial_days,
        })
    }

    async fn login_at(
        &self,
        username: &str,
        password: &str,
        device_id: Option<&str>,
        now: i64,
    ) -> Result<LoginOutcome, EngineError> {
        let key = normalize(username)?;

        let Some(mut record) = self.store.get(&key).await? else {
            debug!(username = %key, "login denied: unknown user");
            return Ok(LoginOutcome::Denied(LoginDenied::UserNotFound));
        };

        if !digest_matches(password, &record.password_digest) {
            debug!(username = %key, "login denied: wrong password");
            return Ok(LoginOutcome::Denied(LoginDenied::WrongPassword));
        }

        // Deferred activation: runs at most once per account. Later logins
        // see expires_at already set and skip this branch.
        if record.expires_at.is_none() {
            let days = record.trial_days.unwrap_or(self.config.default_trial_days);
            record.expires_at = Some(now + days * SECS_PER_DAY);
            record.trial_days = None;
            self.store.put(&record).await?;
            info!(username = %key, days, "trial window activated");
        }

        if record.is_expired(now) {
            debug!(username = %key, "login denied: expired");
            return Ok(LoginOutcome::Denied(LoginDenied::Expired));
        }

        let binding = self.config.device_binding;
        if binding != DeviceBinding::Disabled {
            match (&record.bound_device, device_id) {
                (None, Some(device)) => {
                    record.bound_device = Some(device.to_owned());
                    self.store.put(&record).await?;
                    info!(username = %key, "device bound on first login");
                    return Ok(LoginOutcome::FirstLogin {
                        username: key,
                        days_left: record.days_left(now),
                        device: device.to_owned(),
                    });
                }
                (Some(bound), presented) => {
                    if binding == DeviceBinding::Enforced
                        && presented.is_some_and(|d| d != bound)
                    {
                        debug!(username = %key, "login denied: device conflict");
                        return Ok(LoginOutcome::Denied(LoginDenied::DeviceConflict));
                    }
                    return Ok(LoginOutcome::ReLogin {
                        username: key,
                        // expires_at is set past the activation branch
                        expires_at_ms: record.expires_at.unwrap_or(0) * 1000,
                        device: bound.clone(),
                    });
                }
                // Binding enabled but no device id presented and none
                // bound yet: behave as a flat login.
                (None, None) => {}
            }
        }

        Ok(LoginOutcome::Active {
            days_left: record.days_left(now),
            username: key,
        })
    }

    async fn check_at(
        &self,
        username: &str,
        now: i64,
    ) -> Result<Option<AccountStatus>, EngineError> {
        let key = normalize(username)?;
        Ok(self.store.get(&key).await?.map(|r| AccountStatus {
            active: !r.is_expired(now),
            username: r.username,
            expires_at: r.expires_at,
            created_at: r.created_at,
        }))
    }
}

/// Normalize a username into its storage key.
fn normalize(username: &str) -> Result<String, EngineError> {
    let key = username.trim().to_ascii_lowercase();
    if key.is_empty() {
        return Err(EngineError::invalid("username must not be empty"));
    }
    Ok(key)
}

fn check_days(days: i64) -> Result<(), EngineError> {
    if days <= 0 {
        return Err(EngineError::invalid("days must be positive"));
    }
    // Keep expiry arithmetic far from i64 range.
    if days > 100 * 365 {
        return Err(EngineError::invalid("days out of range"));
    }
    Ok(())
}

/// Get current unix timestamp.
#[inline]
#[allow(clippy::cast_possible_wrap)]
fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const NOW: i64 = 1_700_000_000;

    fn engine(config: EngineConfig) -> EntitlementEngine<MemoryStore> {
        EntitlementEngine::new(MemoryStore::new(), config)
    }

    fn deferred() -> EngineConfig {
        EngineConfig {
            activation: ActivationPolicy::Deferred,
            ..EngineConfig::default()
        }
    }

    fn immediate() -> EngineConfig {
        EngineConfig {
            activation: ActivationPolicy::Immediate,
            ..EngineConfig::default()
        }
    }

    fn no_binding(mut cfg: EngineConfig) -> EngineConfig {
        cfg.device_binding = DeviceBinding::Disabled;
        cfg
    }

    // ── create ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_deferred_stores_trial_days() {
        let engine = engine(deferred());
        let record = engine.create_at("Alice", "pw1", 30, NOW).await.unwrap();

        assert_eq!(record.username, "alice");
        assert_eq!(record.trial_days, Some(30));
        assert_eq!(record.expires_at, None);
        assert_eq!(record.created_at, NOW);
    }

    #[tokio::test]
    async fn create_immediate_fixes_expiry() {
        let engine = engine(immediate());
        let record = engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        assert_eq!(record.expires_at, Some(NOW + 30 * SECS_PER_DAY));
        assert_eq!(record.trial_days, None);
    }

    #[tokio::test]
    async fn create_rejects_bad_input() {
        let engine = engine(deferred());
        assert!(matches!(
            engine.create_at("", "pw", 30, NOW).await,
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.create_at("alice", "  ", 30, NOW).await,
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.create_at("alice", "pw", 0, NOW).await,
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.create_at("alice", "pw", -5, NOW).await,
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_case_insensitively() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw", 30, NOW).await.unwrap();
        assert!(matches!(
            engine.create_at("ALICE", "other", 10, NOW).await,
            Err(EngineError::AlreadyExists)
        ));
    }

    // ── renew ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn renew_before_activation_accumulates_trial_days() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw", 30, NOW).await.unwrap();

        let outcome = engine.renew_at("alice", 10, NOW).await.unwrap();
        assert_eq!(outcome.trial_days, Some(40));
        assert_eq!(outcome.expires_at, None);
    }

    #[tokio::test]
    async fn renew_after_activation_extends_expiry() {
        let engine = engine(immediate());
        engine.create_at("alice", "pw", 30, NOW).await.unwrap();

        let outcome = engine.renew_at("alice", 10, NOW + 100).await.unwrap();
        assert_eq!(outcome.expires_at, Some(NOW + 40 * SECS_PER_DAY));
    }

    #[tokio::test]
    async fn renew_of_lapsed_account_restarts_from_now() {
        let engine = engine(immediate());
        engine.create_at("alice", "pw", 1, NOW).await.unwrap();

        // Well past expiry: the extension must grant a full 10 future days,
        // not land in the past.
        let later = NOW + 50 * SECS_PER_DAY;
        let outcome = engine.renew_at("alice", 10, later).await.unwrap();
        assert_eq!(outcome.expires_at, Some(later + 10 * SECS_PER_DAY));
    }

    #[tokio::test]
    async fn renew_is_monotonic() {
        let engine = engine(immediate());
        engine.create_at("alice", "pw", 30, NOW).await.unwrap();

        let before = engine.store().get("alice").await.unwrap().unwrap();
        let outcome = engine.renew_at("alice", 5, NOW + 10).await.unwrap();
        assert!(outcome.expires_at.unwrap() >= before.expires_at.unwrap());
        assert!(outcome.expires_at.unwrap() >= NOW + 10 + 5 * SECS_PER_DAY);
    }

    #[tokio::test]
    async fn renew_missing_user_is_not_found() {
        let engine = engine(deferred());
        assert!(matches!(
            engine.renew_at("ghost", 10, NOW).await,
            Err(EngineError::NotFound)
        ));
    }

    // ── login ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn login_unknown_user_is_denied() {
        let engine = engine(deferred());
        let outcome = engine.login_at("ghost", "pw", None, NOW).await.unwrap();
        assert_eq!(outcome, LoginOutcome::Denied(LoginDenied::UserNotFound));
    }

    #[tokio::test]
    async fn login_wrong_password_is_denied_without_mutation() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        let outcome = engine
            .login_at("alice", "wrong", None, NOW)
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::Denied(LoginDenied::WrongPassword));

        // The denial must not have activated the window.
        let record = engine.store().get("alice").await.unwrap().unwrap();
        assert_eq!(record.expires_at, None);
        assert_eq!(record.trial_days, Some(30));
    }

    #[tokio::test]
    async fn first_login_activates_trial_exactly_once() {
        let engine = engine(no_binding(deferred()));
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        let outcome = engine.login_at("alice", "pw1", None, NOW).await.unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::Active {
                username: "alice".into(),
                days_left: 30
            }
        );

        let activated = engine.store().get("alice").await.unwrap().unwrap();
        assert_eq!(activated.expires_at, Some(NOW + 30 * SECS_PER_DAY));
        assert_eq!(activated.trial_days, None);

        // A second login must not move the expiry.
        engine
            .login_at("alice", "pw1", None, NOW + 500)
            .await
            .unwrap();
        let after = engine.store().get("alice").await.unwrap().unwrap();
        assert_eq!(after.expires_at, activated.expires_at);
    }

    #[tokio::test]
    async fn activation_uses_default_when_no_trial_days() {
        let engine = engine(no_binding(deferred()));
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        // Simulate an account written without trial days.
        let mut record = engine.store().get("alice").await.unwrap().unwrap();
        record.trial_days = None;
        engine.store().put(&record).await.unwrap();

        engine.login_at("alice", "pw1", None, NOW).await.unwrap();
        let after = engine.store().get("alice").await.unwrap().unwrap();
        assert_eq!(after.expires_at, Some(NOW + 7 * SECS_PER_DAY));
    }

    #[tokio::test]
    async fn login_at_exact_expiry_second_is_denied() {
        let engine = engine(no_binding(immediate()));
        engine.create_at("alice", "pw1", 1, NOW).await.unwrap();

        let exp = NOW + SECS_PER_DAY;
        let just_before = engine
            .login_at("alice", "pw1", None, exp - 1)
            .await
            .unwrap();
        assert!(matches!(just_before, LoginOutcome::Active { .. }));

        let at_boundary = engine.login_at("alice", "pw1", None, exp).await.unwrap();
        assert_eq!(at_boundary, LoginOutcome::Denied(LoginDenied::Expired));
    }

    #[tokio::test]
    async fn login_past_expiry_is_denied() {
        let engine = engine(no_binding(immediate()));
        engine.create_at("alice", "pw1", 1, NOW).await.unwrap();

        let outcome = engine
            .login_at("alice", "pw1", None, NOW + SECS_PER_DAY + 1)
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::Denied(LoginDenied::Expired));
    }

    #[tokio::test]
    async fn renew_then_login_shows_increased_days() {
        let engine = engine(no_binding(deferred()));
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        let first = engine.login_at("alice", "pw1", None, NOW).await.unwrap();
        let LoginOutcome::Active { days_left, .. } = first else {
            panic!("expected active login");
        };
        assert_eq!(days_left, 30);

        engine.renew_at("alice", 10, NOW).await.unwrap();
        let second = engine.login_at("alice", "pw1", None, NOW).await.unwrap();
        let LoginOutcome::Active { days_left, .. } = second else {
            panic!("expected active login");
        };
        assert_eq!(days_left, 40);
    }

    // ── device binding ────────────────────────────────────────────────

    #[tokio::test]
    async fn first_device_login_binds() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        let outcome = engine
            .login_at("alice", "pw1", Some("device-1"), NOW)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::FirstLogin {
                username: "alice".into(),
                days_left: 30,
                device: "device-1".into(),
            }
        );

        let record = engine.store().get("alice").await.unwrap().unwrap();
        assert_eq!(record.bound_device.as_deref(), Some("device-1"));
    }

    #[tokio::test]
    async fn re_login_same_device_reports_expiry_millis() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();
        engine
            .login_at("alice", "pw1", Some("device-1"), NOW)
            .await
            .unwrap();

        let outcome = engine
            .login_at("alice", "pw1", Some("device-1"), NOW + 10)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::ReLogin {
                username: "alice".into(),
                expires_at_ms: (NOW + 30 * SECS_PER_DAY) * 1000,
                device: "device-1".into(),
            }
        );
    }

    #[tokio::test]
    async fn enforced_binding_rejects_second_device() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();
        engine
            .login_at("alice", "pw1", Some("device-1"), NOW)
            .await
            .unwrap();

        let outcome = engine
            .login_at("alice", "pw1", Some("device-2"), NOW + 10)
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::Denied(LoginDenied::DeviceConflict));
    }

    #[tokio::test]
    async fn advisory_binding_accepts_second_device() {
        let mut cfg = deferred();
        cfg.device_binding = DeviceBinding::Advisory;
        let engine = engine(cfg);
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();
        engine
            .login_at("alice", "pw1", Some("device-1"), NOW)
            .await
            .unwrap();

        let outcome = engine
            .login_at("alice", "pw1", Some("device-2"), NOW + 10)
            .await
            .unwrap();
        // Advisory mode still reports the originally bound device.
        assert!(matches!(
            outcome,
            LoginOutcome::ReLogin { device, .. } if device == "device-1"
        ));
    }

    #[tokio::test]
    async fn binding_login_without_device_id_is_flat() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        let outcome = engine.login_at("alice", "pw1", None, NOW).await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Active { .. }));

        let record = engine.store().get("alice").await.unwrap().unwrap();
        assert_eq!(record.bound_device, None);
    }

    // ── check / reactivate / delete / list ────────────────────────────

    #[tokio::test]
    async fn check_reports_unactivated_as_active() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        let status = engine.check_at("alice", NOW).await.unwrap().unwrap();
        assert!(status.active);
        assert_eq!(status.expires_at, None);
        assert_eq!(status.created_at, NOW);
    }

    #[tokio::test]
    async fn check_boundary_matches_login_boundary() {
        let engine = engine(no_binding(immediate()));
        engine.create_at("alice", "pw1", 1, NOW).await.unwrap();

        let exp = NOW + SECS_PER_DAY;
        assert!(engine.check_at("alice", exp - 1).await.unwrap().unwrap().active);
        assert!(!engine.check_at("alice", exp).await.unwrap().unwrap().active);
    }

    #[tokio::test]
    async fn check_missing_user_is_none() {
        let engine = engine(deferred());
        assert!(engine.check_at("ghost", NOW).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reactivate_overwrites_device_and_expiry() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();
        engine
            .login_at("alice", "pw1", Some("device-1"), NOW)
            .await
            .unwrap();

        let expiry_ms = (NOW + 90 * SECS_PER_DAY) * 1000;
        let record = engine
            .reactivate("alice", "device-2", expiry_ms)
            .await
            .unwrap();
        assert_eq!(record.bound_device.as_deref(), Some("device-2"));
        assert_eq!(record.expires_at, Some(expiry_ms / 1000));
    }

    #[tokio::test]
    async fn reactivate_rejects_non_positive_expiry() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();
        assert!(matches!(
            engine.reactivate("alice", "device-1", 0).await,
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let engine = engine(deferred());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        assert_eq!(engine.delete("alice").await.unwrap(), 1);
        assert_eq!(engine.delete("alice").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_derives_expired_flag() {
        let engine = engine(immediate());
        engine.create_at("alice", "pw1", 30, NOW).await.unwrap();

        // Insert an already-lapsed record alongside.
        engine
            .store()
            .put(&AccountRecord {
                username: "bob".into(),
                password_digest: sha224_hex("pw2"),
                created_at: 0,
                trial_days: None,
                expires_at: Some(1),
                bound_device: None,
            })
            .await
            .unwrap();

        let summaries = engine.list().await.unwrap();
        assert_eq!(summaries.len(), 2);
        let alice = summaries.iter().find(|s| s.username == "alice").unwrap();
        let bob = summaries.iter().find(|s| s.username == "bob").unwrap();
        assert!(!alice.expired);
        assert!(bob.expired);
    }
}
