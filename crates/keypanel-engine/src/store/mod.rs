//! Account store backends.
//!
//! - [`AccountStore`] — data-access trait (implement this for new backends)
//! - [`MemoryStore`] — in-memory map, tests and small deployments
//! - [`SqlStore`] — PostgreSQL / MySQL / SQLite via sqlx

mod memory;
mod sql;
mod traits;

pub(crate) mod queries;

pub use memory::MemoryStore;
pub use sql::{SqlDialect, SqlStore, SqlStoreConfig};
pub use traits::AccountStore;
