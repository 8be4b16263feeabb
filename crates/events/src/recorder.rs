//! Pending-event buffer owned by an aggregate root.

/// Collects the events an aggregate root raises until they are handed off.
///
/// Events are returned in the order they were recorded. The recorder never
/// inspects or reorders them.
#[derive(Debug, Clone)]
pub struct EventRecorder<E> {
    pending: Vec<E>,
}

impl<E> EventRecorder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: E) {
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain pending events, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }
}

impl<E> Default for EventRecorder<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}
