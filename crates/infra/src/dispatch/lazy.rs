use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use bedrock_core::AppResult;

use super::error::DispatchError;
use super::normalize_key;

/// Runner constructor registered for one backend.
pub type RunnerFactory<R> = Box<dyn Fn() -> AppResult<Arc<R>> + Send + Sync>;

/// One backend's factory and its constructed runner, if any.
struct Slot<R: ?Sized> {
    factory: RunnerFactory<R>,
    instance: RwLock<Option<Arc<R>>>,
}

impl<R: ?Sized> Slot<R> {
    // A panicking factory poisons only this slot, and leaves it empty, so the
    // guarded value is still consistent.
    fn constructed(&self) -> Option<Arc<R>> {
        self.instance
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }
}

/// Registry that constructs each runner on first resolution.
///
/// Resolution follows the same rules as [`super::RunnerRegistry`]. Construction
/// is an atomic get-or-create per key: concurrent first-time resolutions of one
/// key run the factory exactly once and all observe the same instance, while
/// other keys stay resolvable. A failed or panicking construction caches
/// nothing, so a later call retries the factory.
///
/// A factory must not resolve its own key from the same registry; that call
/// would wait on the slot it is filling.
pub struct LazyRunnerRegistry<R: ?Sized> {
    slots: HashMap<String, Slot<R>>,
}

impl<R: ?Sized> LazyRunnerRegistry<R> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Register a factory under `db_type` (composition phase only).
    pub fn register<F>(mut self, db_type: &str, factory: F) -> Result<Self, DispatchError>
    where
        F: Fn() -> AppResult<Arc<R>> + Send + Sync + 'static,
    {
        let key = normalize_key(db_type)?;
        if self.slots.contains_key(&key) {
            return Err(DispatchError::duplicate(db_type));
        }
        debug!(backend = %key, "registered lazy runner factory");
        self.slots.insert(
            key,
            Slot {
                factory: Box::new(factory),
                instance: RwLock::new(None),
            },
        );
        Ok(self)
    }

    pub fn resolve(&self, db_type: &str) -> Result<Arc<R>, DispatchError> {
        let key = normalize_key(db_type)?;
        let slot = self
            .slots
            .get(&key)
            .ok_or_else(|| DispatchError::unsupported(db_type))?;

        if let Some(runner) = slot.constructed() {
            return Ok(runner);
        }

        let mut instance = slot
            .instance
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(runner) = instance.as_ref() {
            return Ok(Arc::clone(runner));
        }

        let runner = (slot.factory)().map_err(|source| DispatchError::Construction {
            backend: db_type.to_string(),
            source,
        })?;
        *instance = Some(Arc::clone(&runner));
        Ok(runner)
    }

    pub fn supports(&self, db_type: &str) -> bool {
        normalize_key(db_type)
            .map(|key| self.slots.contains_key(&key))
            .unwrap_or(false)
    }

    /// Whether the runner for `db_type` has already been constructed.
    pub fn is_constructed(&self, db_type: &str) -> bool {
        normalize_key(db_type)
            .ok()
            .and_then(|key| self.slots.get(&key))
            .is_some_and(|slot| slot.constructed().is_some())
    }

    /// Registered (normalized) backend keys, sorted.
    pub fn backends(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl<R: ?Sized> Default for LazyRunnerRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized> core::fmt::Debug for LazyRunnerRegistry<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LazyRunnerRegistry")
            .field("backends", &self.backends())
            .finish_non_exhaustive()
    }
}
