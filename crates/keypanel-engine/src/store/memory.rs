//! In-memory account store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::EngineError;
use crate::record::AccountRecord;

use super::traits::AccountStore;

/// Simple in-memory account store backed by a map.
///
/// Suitable for tests and single-process deployments where persistence
/// across restarts is not required. For anything else, use
/// [`SqlStore`](super::SqlStore).
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<HashMap<String, AccountRecord>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Check if no accounts are stored.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn get(&self, username: &str) -> Result<Option<AccountRecord>, EngineError> {
        Ok(self.accounts.read().await.get(username).cloned())
    }

    async fn put(&self, record: &AccountRecord) -> Result<(), EngineError> {
        self.accounts
            .write()
            .await
            .insert(record.username.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<bool, EngineError> {
        Ok(self.accounts.write().await.remove(username).is_some())
    }

    async fn list(&self) -> Result<Vec<AccountRecord>, EngineError> {
        let mut records: Vec<AccountRecord> =
            self.accounts.read().await.values().cloned().collect();
        records.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(records)
    }
}
