//! Configuration loading for the composition root.

use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::dispatch::{DispatchError, RunnerRegistry};

/// Which backend the process runs migrations against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchConfig {
    /// Backend key, matched case-insensitively against registered runners.
    pub db_type: String,
}

impl DispatchConfig {
    /// Environment variable holding the backend key.
    pub const DB_TYPE_ENV: &'static str = "BEDROCK_DB_TYPE";
    pub const DEFAULT_DB_TYPE: &'static str = "postgres";

    pub fn new(db_type: impl Into<String>) -> Self {
        Self {
            db_type: db_type.into(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup` (environment-shaped key/value source).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(Self::DB_TYPE_ENV) {
            Some(db_type) => Self::new(db_type),
            None => {
                warn!(
                    "{} not set; defaulting to {}",
                    Self::DB_TYPE_ENV,
                    Self::DEFAULT_DB_TYPE
                );
                Self::default()
            }
        }
    }

    /// Resolve the configured backend's runner.
    pub fn resolve_runner<R: ?Sized>(
        &self,
        registry: &RunnerRegistry<R>,
    ) -> Result<Arc<R>, DispatchError> {
        registry.resolve(&self.db_type)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DB_TYPE)
    }
}
