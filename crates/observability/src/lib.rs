//! Tracing / logging setup shared by binaries and test harnesses.
//!
//! The kernel crates only emit through the `tracing` facade; installing a
//! subscriber is the composition root's job.

/// Initialize process-wide logging (JSON unless `BEDROCK_LOG_FORMAT=pretty`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&tracing::LogConfig::from_env());
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat};
