//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound ports: clocks and event sinks.

mod clock;
mod event_log;

pub use clock::{ManualClock, SystemClock};
pub use event_log::{InMemoryEventLog, TracingEventSink};
