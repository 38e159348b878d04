//! In-memory sink retaining every event for callers that need full materialization.

use super::{EventSink, SinkReport};
use crate::models::TrackedEvent;
use std::io;

#[derive(Default)]
pub struct MemorySink {
    events: Vec<TrackedEvent>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for MemorySink {
    fn send(&mut self, event: &TrackedEvent) -> io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }

    fn finish(self: Box<Self>) -> io::Result<SinkReport> {
        let recorded = self.events.len() as u64;
        Ok(SinkReport::new(self.events, recorded))
    }
}
