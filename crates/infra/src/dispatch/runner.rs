use bedrock_core::AppResult;

/// Backend-specific migration runner.
///
/// Implementations live with the storage drivers; the dispatch registry only
/// selects one. Failures are reported as application-layer exceptions.
pub trait MigrationRunner: Send + Sync {
    /// Backend key this runner serves (e.g. "postgres").
    fn backend(&self) -> &str;

    /// Apply pending migrations.
    fn apply(&self) -> AppResult<()>;

    /// Roll back the most recently applied migration.
    fn rollback(&self) -> AppResult<()>;
}
