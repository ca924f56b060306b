//! # Outbound Ports
//!
//! What the token needs from its environment: a clock for authorization
//! windows and somewhere to publish events.

use crate::events::TokenEvent;

/// Source of the current time, in unix seconds.
pub trait Clock: Send + Sync {
    /// Current unix time in seconds.
    fn now(&self) -> u64;
}

/// Receiver of committed events.
pub trait EventSink: Send + Sync {
    /// Called once per event, in emission order, after the call commits.
    fn emit(&self, event: &TokenEvent);
}
