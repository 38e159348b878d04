//! JSON Lines persistence for scroll traces.

use super::{read_lines, write_lines};
use crate::Result;
use crate::models::ScrollSample;
use std::path::Path;

/// Read a scroll trace.
///
/// # Errors
/// `Error::Io` when the file cannot be read; `Error::Parse` with a 1-based
/// line number when a line is not a valid sample.
pub fn read_trace<P: AsRef<Path>>(path: P) -> Result<Vec<ScrollSample>> {
    let path = path.as_ref();
    let samples = read_lines(path)?;
    log::trace!("read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Write a scroll trace, creating parent directories as needed.
///
/// # Errors
/// `Error::Io` when the file cannot be created or written.
pub fn write_trace<P: AsRef<Path>>(path: P, samples: &[ScrollSample]) -> Result<()> {
    let path = path.as_ref();
    write_lines(path, samples)?;
    log::trace!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}
