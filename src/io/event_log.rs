//! JSON Lines persistence for tracked-event logs.

use super::{read_lines, write_lines};
use crate::Result;
use crate::models::TrackedEvent;
use std::path::Path;

/// Read a tracked-event log.
///
/// # Errors
/// `Error::Io` when the file cannot be read; `Error::Parse` with a 1-based
/// line number when a line is not a valid event.
pub fn read_event_log<P: AsRef<Path>>(path: P) -> Result<Vec<TrackedEvent>> {
    let path = path.as_ref();
    let events = read_lines(path)?;
    log::trace!("read {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Write a tracked-event log, creating parent directories as needed.
///
/// # Errors
/// `Error::Io` when the file cannot be created or written.
pub fn write_event_log<P: AsRef<Path>>(path: P, events: &[TrackedEvent]) -> Result<()> {
    let path = path.as_ref();
    write_lines(path, events)?;
    log::trace!("wrote {} events to {}", events.len(), path.display());
    Ok(())
}
