//! Configuration validation logic.

use crate::loader::ConfigError;
use crate::types::StoreBackend;
use crate::Config;

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.listen.trim().is_empty() {
        return Err(ConfigError::Validation("server.listen is empty".into()));
    }
    if config.server.admin_secret.trim().is_empty() {
        return Err(ConfigError::Validation(
            "server.admin_secret is empty".into(),
        ));
    }
    if let Some(key) = &config.server.device_key {
        if key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.device_key must not be blank when set".into(),
            ));
        }
    }
    if config.store.backend == StoreBackend::Sql
        && config
            .store
            .database_url
            .as_deref()
            .unwrap_or("")
            .trim()
            .is_empty()
    {
        return Err(ConfigError::Validation(
            "store.database_url is required when store.backend = sql".into(),
        ));
    }
    if config.store.max_connections == 0 {
        return Err(ConfigError::Validation(
            "store.max_connections must be > 0".into(),
        ));
    }
    if config.store.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "store.connect_timeout_secs must be > 0".into(),
        ));
    }
    if config.entitlement.default_trial_days <= 0 {
        return Err(ConfigError::Validation(
            "entitlement.default_trial_days must be > 0".into(),
        ));
    }
    Ok(())
}
