//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use keypanel_config::{Config, StoreBackend};
use keypanel_engine::{
    AccountStore, EntitlementEngine, MemoryStore, SqlStore, SqlStoreConfig,
};

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<EntitlementEngine<Arc<dyn AccountStore>>>,
    pub admin_secret: Arc<str>,
    /// Optional preshared key letting device clients delete their own
    /// account without the admin secret.
    pub device_key: Option<Arc<str>>,
}

impl AppState {
    /// Build state from configuration, connecting the store backend.
    pub async fn from_config(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let store = build_store(config).await?;
        let engine = EntitlementEngine::new(store, config.entitlement.clone());

        Ok(Self {
            engine: Arc::new(engine),
            admin_secret: Arc::from(config.server.admin_secret.as_str()),
            device_key: config
                .server
                .device_key
                .as_deref()
                .map(Arc::from),
        })
    }
}

async fn build_store(config: &Config) -> Result<Arc<dyn AccountStore>, Box<dyn std::error::Error>> {
    match config.store.backend {
        StoreBackend::Memory => {
            info!("using in-memory account store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Sql => {
            // validate_config guarantees the URL is present for this backend
            let url = config
                .store
                .database_url
                .as_deref()
                .ok_or("store.database_url is required when store.backend = sql")?;

            let store = SqlStore::connect(
                SqlStoreConfig::new(url)
                    .max_connections(config.store.max_connections)
                    .connect_timeout(Duration::from_secs(config.store.connect_timeout_secs)),
            )
            .await?;
            store.migrate().await?;
            info!(dialect = ?store.dialect(), "connected to sql account store");
            Ok(Arc::new(store))
        }
    }
}
