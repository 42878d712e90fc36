//! Configuration loading and CLI definitions for the keypanel server.
//!
//! Config files may be JSON (with `//` comments in `.jsonc`), YAML, or
//! TOML, chosen by file extension. CLI flags override file values, and
//! [`validate_config`] runs after overrides so the server never starts
//! with an unusable configuration.

pub mod cli;
pub mod defaults;
pub mod loader;
pub mod types;
pub mod validate;

pub use cli::{apply_overrides, CliOverrides};
pub use loader::{load_config, ConfigError};
pub use types::{Config, LoggingConfig, MetricsConfig, ServerConfig, StoreBackend, StoreConfig};
pub use validate::validate_config;
