//! Account storage and entitlement logic for keypanel.
//!
//! This crate owns the user account lifecycle: creation, renewal,
//! first-login activation, device binding, and lazy expiry evaluation.
//! HTTP plumbing lives in `keypanel-server`; this crate only sees an
//! [`AccountStore`] and a clock.
//!
//! # Example
//!
//! ```
//! use keypanel_engine::{EngineConfig, EntitlementEngine, MemoryStore};
//!
//! # async fn example() -> Result<(), keypanel_engine::EngineError> {
//! let engine = EntitlementEngine::new(MemoryStore::new(), EngineConfig::default());
//!
//! let record = engine.create("Alice", "secret", 30).await?;
//! assert_eq!(record.username, "alice");
//! # Ok(())
//! # }
//! ```

mod config;
mod engine;
mod error;
mod hash;
mod record;
mod store;

pub use config::{ActivationPolicy, DeviceBinding, EngineConfig};
pub use engine::{EntitlementEngine, LoginDenied, LoginOutcome, RenewOutcome};
pub use error::EngineError;
pub use hash::{digest_matches, sha224_hex};
pub use record::{AccountRecord, AccountStatus, AccountSummary};
pub use store::{AccountStore, MemoryStore, SqlDialect, SqlStore, SqlStoreConfig};
