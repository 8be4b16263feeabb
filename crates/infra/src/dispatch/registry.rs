use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::error::DispatchError;
use super::normalize_key;
use super::runner::MigrationRunner;

/// Immutable mapping from case-folded backend key to one runner instance.
///
/// Built once by the composition root through [`RunnerRegistryBuilder`]; never
/// mutated afterwards, so it can be shared across threads without locking.
pub struct RunnerRegistry<R: ?Sized> {
    runners: HashMap<String, Arc<R>>,
}

impl<R: ?Sized> RunnerRegistry<R> {
    pub fn builder() -> RunnerRegistryBuilder<R> {
        RunnerRegistryBuilder::new()
    }

    /// Resolve the runner registered for `db_type` (case-insensitive).
    ///
    /// Returns the registered instance itself (a clone of its `Arc`), so every
    /// call for the same key yields the same runner.
    pub fn resolve(&self, db_type: &str) -> Result<Arc<R>, DispatchError> {
        let key = normalize_key(db_type)?;
        self.runners
            .get(&key)
            .map(Arc::clone)
            .ok_or_else(|| DispatchError::unsupported(db_type))
    }

    /// Whether a runner is registered for `db_type`. Blank input is never supported.
    pub fn supports(&self, db_type: &str) -> bool {
        normalize_key(db_type)
            .map(|key| self.runners.contains_key(&key))
            .unwrap_or(false)
    }

    /// Registered (normalized) backend keys, sorted.
    pub fn backends(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.runners.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.runners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runners.is_empty()
    }
}

impl RunnerRegistry<dyn MigrationRunner> {
    /// Build a registry keyed by each runner's own [`MigrationRunner::backend`].
    pub fn from_runners<I>(runners: I) -> Result<Self, DispatchError>
    where
        I: IntoIterator<Item = Arc<dyn MigrationRunner>>,
    {
        runners
            .into_iter()
            .try_fold(Self::builder(), |builder, runner| {
                let key = runner.backend().to_string();
                builder.register(&key, runner)
            })
            .map(RunnerRegistryBuilder::build)
    }
}

impl<R: ?Sized> core::fmt::Debug for RunnerRegistry<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RunnerRegistry")
            .field("backends", &self.backends())
            .finish()
    }
}

/// Unbuilt registry: collects one runner per backend key.
pub struct RunnerRegistryBuilder<R: ?Sized> {
    runners: HashMap<String, Arc<R>>,
}

impl<R: ?Sized> RunnerRegistryBuilder<R> {
    pub fn new() -> Self {
        Self {
            runners: HashMap::new(),
        }
    }

    /// Register `runner` under `db_type`.
    ///
    /// Keys are case-folded, so "Postgres" and "postgres" collide and the
    /// second registration fails with [`DispatchError::DuplicateBackend`].
    pub fn register(mut self, db_type: &str, runner: Arc<R>) -> Result<Self, DispatchError> {
        let key = normalize_key(db_type)?;
        if self.runners.contains_key(&key) {
            return Err(DispatchError::duplicate(db_type));
        }
        debug!(backend = %key, "registered runner");
        self.runners.insert(key, runner);
        Ok(self)
    }

    /// Freeze the mapping.
    pub fn build(self) -> RunnerRegistry<R> {
        debug!(backends = self.runners.len(), "runner registry built");
        RunnerRegistry {
            runners: self.runners,
        }
    }
}

impl<R: ?Sized> Default for RunnerRegistryBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
