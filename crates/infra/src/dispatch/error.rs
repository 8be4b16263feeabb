use thiserror::Error;

use bedrock_core::{Exception, InvalidArgument};

/// Failures of backend registration and resolution.
///
/// None of these are transient; callers should not retry.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// Empty or blank backend key.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// No runner registered for the key. Carries the caller's original input.
    #[error("unsupported backend: {0}")]
    UnsupportedBackend(String),

    /// A runner was already registered for the (normalized) key.
    #[error("backend already registered: {0}")]
    DuplicateBackend(String),

    /// A lazily registered runner factory failed. `backend` is the caller's input.
    #[error("failed to construct runner for {backend}: {source}")]
    Construction {
        backend: String,
        #[source]
        source: Exception,
    },
}

impl DispatchError {
    pub fn unsupported(db_type: impl Into<String>) -> Self {
        Self::UnsupportedBackend(db_type.into())
    }

    pub fn duplicate(db_type: impl Into<String>) -> Self {
        Self::DuplicateBackend(db_type.into())
    }
}
