//! Data-access trait for account stores.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::EngineError;
use crate::record::AccountRecord;

/// Data-access layer for account records.
///
/// Implementations provide only persistence; all lifecycle logic
/// (activation, expiry, binding) lives in
/// [`EntitlementEngine`](crate::EntitlementEngine). Backends must provide
/// read-after-write consistency per key; cross-key ordering is not
/// required.
///
/// Implementations must be thread-safe (`Send + Sync`) as they may be
/// called concurrently from multiple requests.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Look up a record by its normalized username key.
    async fn get(&self, username: &str) -> Result<Option<AccountRecord>, EngineError>;

    /// Insert or replace the full record (last write wins).
    async fn put(&self, record: &AccountRecord) -> Result<(), EngineError>;

    /// Remove a record. Returns `true` if something was removed.
    async fn delete(&self, username: &str) -> Result<bool, EngineError>;

    /// Enumerate all records. Linear scan; acceptable at this data scale.
    async fn list(&self) -> Result<Vec<AccountRecord>, EngineError>;
}

/// Blanket implementation for `Arc<S>` where `S: AccountStore`.
///
/// Allows passing `Arc<dyn AccountStore>` directly to the engine.
#[async_trait]
impl<S: AccountStore + ?Sized> AccountStore for Arc<S> {
    #[inline]
    async fn get(&self, username: &str) -> Result<Option<AccountRecord>, EngineError> {
        (**self).get(username).await
    }

    #[inline]
    async fn put(&self, record: &AccountRecord) -> Result<(), EngineError> {
        (**self).put(record).await
    }

    #[inline]
    async fn delete(&self, username: &str) -> Result<bool, EngineError> {
        (**self).delete(username).await
    }

    #[inline]
    async fn list(&self) -> Result<Vec<AccountRecord>, EngineError> {
        (**self).list().await
    }
}

/// Blanket implementation for `Box<S>` where `S: AccountStore`.
#[async_trait]
impl<S: AccountStore + ?Sized> AccountStore for Box<S> {
    #[inline]
    async fn get(&self, username: &str) -> Result<Option<AccountRecord>, EngineError> {
        (**self).get(username).await
    }

    #[inline]
    async fn put(&self, record: &AccountRecord) -> Result<(), EngineError> {
        (**self).put(record).await
    }

    #[inline]
    async fn delete(&self, username: &str) -> Result<bool, EngineError> {
        (**self).delete(username).await
    }

    #[inline]
    async fn list(&self) -> Result<Vec<AccountRecord>, EngineError> {
        (**self).list().await
    }
}
