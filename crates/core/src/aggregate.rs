//! Aggregate root marker for domain models.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// An aggregate root is the single entry point of a cluster of related
/// entities: invariants for the cluster are enforced, and events for it are
/// raised, only through the root. It carries no state beyond its entity
/// identity; equality and hashing follow [`Entity`].
///
/// Event collection lives in `bedrock-events` (`EventRecorder`) so this crate
/// stays free of event types.
pub trait AggregateRoot: Entity {}
