//! Configuration type definitions for the server, store, entitlement
//! policy, metrics, and logging.

use keypanel_engine::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::defaults::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub entitlement: EngineConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address, e.g. 0.0.0.0:8787
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Shared secret gating the /admin routes.
    pub admin_secret: String,
    /// Optional preshared key letting device clients delete their own
    /// account without the admin secret.
    #[serde(default)]
    pub device_key: Option<String>,
}

/// Which persistence backend holds account records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map, lost on restart.
    #[default]
    Memory,
    /// SQL database via `store.database_url`.
    Sql,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Connection URL (`postgres://`, `mysql://`, or `sqlite:`).
    /// Required when backend = sql.
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_sql_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_sql_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            database_url: None,
            max_connections: default_sql_max_connections(),
            connect_timeout_secs: default_sql_connect_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetricsConfig {
    /// Prometheus exporter listen address. None disables the exporter.
    pub listen: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level filter (trace/debug/info/warn/error).
    pub level: Option<String>,
    /// Output format (json, compact, pretty). Default: pretty.
    pub format: Option<String>,
    /// Output target (stdout, stderr). Default: stderr.
    pub output: Option<String>,
}
