//! Event sinks for handling tracker output without coupling the tracker to
//! a transport.

use crate::models::TrackedEvent;
use std::io;

/// Aggregated result returned by a sink after the session completes.
#[derive(Debug, Default)]
pub struct SinkReport {
    /// Events the sink retained, if it retains any.
    pub events: Vec<TrackedEvent>,
    /// Total number of events the sink accepted.
    pub recorded: u64,
}

impl SinkReport {
    #[must_use]
    pub fn new(events: Vec<TrackedEvent>, recorded: u64) -> Self {
        Self { events, recorded }
    }
}

/// Trait implemented by delivery targets for tracked events.
///
/// Delivery is fire-and-forget from the tracker's point of view: a failed
/// `send` is logged and dropped by the tracker, never surfaced to its
/// caller.
pub trait EventSink {
    /// Deliver one event.
    fn send(&mut self, event: &TrackedEvent) -> io::Result<()>;

    /// Finalize the sink once the session completes.
    fn finish(self: Box<Self>) -> io::Result<SinkReport>;
}

pub mod json_lines;
pub mod memory;

pub use self::json_lines::JsonLinesSink;
pub use self::memory::MemorySink;
