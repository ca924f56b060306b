//! Event sink adapters.

use crate::events::TokenEvent;
use crate::ports::outbound::EventSink;
use parking_lot::RwLock;
use tracing::info;

/// Keeps every event in memory, in order.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<TokenEvent>>,
}

impl InMemoryEventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<TokenEvent> {
        self.events.read().clone()
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Last event recorded.
    pub fn last(&self) -> Option<TokenEvent> {
        self.events.read().last().cloned()
    }

    /// Removes and returns all events.
    pub fn drain(&self) -> Vec<TokenEvent> {
        std::mem::take(&mut *self.events.write())
    }
}

impl EventSink for InMemoryEventLog {
    fn emit(&self, event: &TokenEvent) {
        self.events.write().push(event.clone());
    }
}

/// Writes every event to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &TokenEvent) {
        match serde_json::to_string(event) {
            Ok(payload) => info!(event = event.name(), %payload, "token event"),
            Err(e) => info!(event = event.name(), error = %e, "token event (unserializable)"),
        }
    }
}
