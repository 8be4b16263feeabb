//! Domain events: immutable, identified, timestamped facts.

pub mod event;
pub mod recorder;

pub use event::{DomainEvent, Event};
pub use recorder::EventRecorder;
