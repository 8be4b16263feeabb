//! Infrastructure layer: backend dispatch and composition-time configuration.

pub mod config;
pub mod dispatch;


pub use config::DispatchConfig;
pub use dispatch::{
    DispatchError, LazyRunnerRegistry, MigrationRunner, RunnerRegistry, RunnerRegistryBuilder,
};
