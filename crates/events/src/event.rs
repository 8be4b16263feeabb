use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bedrock_core::EventId;

/// Identity and occurrence time of a domain event.
///
/// Events are facts: once built, neither field changes. There are exactly two
/// ways to obtain one:
/// - [`DomainEvent::create`] when an aggregate raises a new event;
/// - [`DomainEvent::rehydrate`] when reconstructing an event from a durable log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainEvent {
    event_id: EventId,
    occurred_on: DateTime<Utc>,
}

impl DomainEvent {
    fn new(event_id: EventId, occurred_on: DateTime<Utc>) -> Self {
        Self {
            event_id,
            occurred_on,
        }
    }

    /// A new event with a fresh identifier, occurring now.
    pub fn create() -> Self {
        Self::new(EventId::new(), Utc::now())
    }

    /// Reconstruct a previously created event.
    ///
    /// The identifier is taken as-is; uniqueness was established when the event
    /// was first created.
    pub fn rehydrate(event_id: EventId, occurred_on: DateTime<Utc>) -> Self {
        Self::new(event_id, occurred_on)
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// When the event occurred (UTC).
    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }
}

/// A concrete domain event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **identified** (each embeds a [`DomainEvent`])
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.item.created").
    fn event_type(&self) -> &'static str;

    fn metadata(&self) -> &DomainEvent;

    fn event_id(&self) -> EventId {
        self.metadata().event_id()
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.metadata().occurred_on()
    }
}
