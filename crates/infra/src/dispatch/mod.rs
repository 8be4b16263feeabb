//! Backend dispatch: resolve a database type name to its registered runner.
//!
//! Producers register one runner per supported backend during composition;
//! afterwards the registry is a pure lookup:
//!
//! ```text
//! "Postgres"
//!   ↓ reject empty / blank input      → DispatchError::InvalidArgument
//!   ↓ case-fold ("postgres")
//!   ↓ lookup
//!   ├─ hit  → the registered Arc<R> (same instance every call)
//!   └─ miss → DispatchError::UnsupportedBackend("Postgres")
//! ```
//!
//! [`RunnerRegistry`] holds eagerly built runners. [`LazyRunnerRegistry`]
//! holds factories and constructs each runner at most once, on first use.

pub mod error;
pub mod lazy;
pub mod registry;
pub mod runner;

pub use error::DispatchError;
pub use lazy::LazyRunnerRegistry;
pub use registry::{RunnerRegistry, RunnerRegistryBuilder};
pub use runner::MigrationRunner;

use bedrock_core::InvalidArgument;

/// Name reported for blank backend keys.
pub const DB_TYPE_PARAM: &str = "dbType";

/// Validate and case-fold a backend key.
pub(crate) fn normalize_key(db_type: &str) -> Result<String, DispatchError> {
    if db_type.trim().is_empty() {
        return Err(InvalidArgument::new(DB_TYPE_PARAM).into());
    }
    Ok(db_type.to_lowercase())
}
