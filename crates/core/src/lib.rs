//! `bedrock-core` — domain kernel building blocks.
//!
//! This crate contains **pure domain** primitives: identity, aggregates and the
//! structured error taxonomy. It performs no IO and never logs.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::AggregateRoot;
pub use entity::{Entity, Identity};
pub use error::{AppResult, DomainResult, Error, Exception, InvalidArgument, Layer};
pub use id::{AggregateId, EventId};
