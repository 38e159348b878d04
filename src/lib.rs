//! Scroll-Depth Analytics Library
//!
//! This library turns a stream of raw scroll samples into discrete,
//! de-duplicated analytics events: one event per depth checkpoint per
//! session, optional pixel-distance bands, and elapsed-time attribution,
//! with JSON Lines persistence for scroll traces and event logs.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{EventCategory, ScrollSample, TrackedEvent};
pub use services::monitor::{MonitorPoll, SampleThrottler, ScrollMonitor, ScrollSurface};
pub use services::replay::{ReplayOptions, ReplaySummary, replay_trace};
pub use services::sink::{EventSink, JsonLinesSink, MemorySink, SinkReport};
pub use services::tracker::checkpoints::{Checkpoint, CheckpointSet};
pub use services::tracker::{SampleResult, ScrollTracker};

use serde::{Deserialize, Serialize};
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    InvalidSample(String),
    Parse { line: usize, message: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::InvalidSample(msg) => write!(f, "Invalid sample: {msg}"),
            Error::Parse { line, message } => {
                write!(f, "Parse error on line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Configuration for a scroll tracker instance
///
/// All flags are optional and default to the values shown below when
/// deserialized from a partial document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Emit one "Percent Scrolled" event per depth checkpoint.
    pub track_percent_scrolled: bool,
    /// Emit "Pixels Scrolled" band events as the high-water mark advances.
    pub track_pixels_scrolled: bool,
    /// Attach measured elapsed seconds to events instead of 0.
    pub track_timing: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            track_percent_scrolled: true,
            track_pixels_scrolled: false,
            track_timing: false,
        }
    }
}
