//! CLI override definitions and application logic.

use clap::Parser;

use crate::types::StoreBackend;
use crate::Config;

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Override HTTP listen address, e.g. 0.0.0.0:8787
    #[arg(long)]
    pub listen: Option<String>,
    /// Override admin API secret
    #[arg(long)]
    pub admin_secret: Option<String>,
    /// Override preshared device deletion key
    #[arg(long)]
    pub device_key: Option<String>,
    /// Override store database URL (switches the backend to sql)
    #[arg(long)]
    pub database_url: Option<String>,
    /// Override default trial days granted at activation
    #[arg(long)]
    pub default_trial_days: Option<i64>,
    /// Override metrics listen address
    #[arg(long)]
    pub metrics_listen: Option<String>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = &overrides.listen {
        config.server.listen = v.clone();
    }
    if let Some(v) = &overrides.admin_secret {
        config.server.admin_secret = v.clone();
    }
    if let Some(v) = &overrides.device_key {
        config.server.device_key = Some(v.clone());
    }
    if let Some(v) = &overrides.database_url {
        config.store.backend = StoreBackend::Sql;
        config.store.database_url = Some(v.clone());
    }
    if let Some(v) = overrides.default_trial_days {
        config.entitlement.default_trial_days = v;
    }
    if let Some(v) = &overrides.metrics_listen {
        config.metrics.listen = Some(v.clone());
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Config, ServerConfig};

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                listen: "127.0.0.1:8787".into(),
                admin_secret: "s3cret".into(),
                device_key: None,
            },
            store: Default::default(),
            entitlement: Default::default(),
            metrics: Default::default(),
            logging: Default::default(),
        }
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = base_config();
        let overrides = CliOverrides {
            listen: Some("0.0.0.0:9000".into()),
            database_url: Some("sqlite:accounts.db".into()),
            log_level: Some("debug".into()),
            ..Default::default()
        };
        apply_overrides(&mut config, &overrides);

        assert_eq!(config.server.listen, "0.0.0.0:9000");
        assert_eq!(config.store.backend, StoreBackend::Sql);
        assert_eq!(config.store.database_url.as_deref(), Some("sqlite:accounts.db"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = base_config();
        apply_overrides(&mut config, &CliOverrides::default());
        assert_eq!(config.server.listen, "127.0.0.1:8787");
        assert_eq!(config.store.backend, StoreBackend::Memory);
    }
}
