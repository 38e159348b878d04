//! Data models for tracked events, scroll samples, and sink results

use serde::{Deserialize, Serialize};

/// Category of a tracked analytics event
///
/// Serialized with the exact wire strings expected by downstream analytics
/// consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    #[serde(rename = "Percent Scrolled")]
    PercentScrolled,
    #[serde(rename = "Pixels Scrolled")]
    PixelsScrolled,
}

impl EventCategory {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::PercentScrolled => "Percent Scrolled",
            EventCategory::PixelsScrolled => "Pixels Scrolled",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single analytics event produced by a tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedEvent {
    pub category: EventCategory,
    pub label: String,
    pub timing_secs: f64,
    pub non_interactive: bool,
}

impl TrackedEvent {
    /// Build an event; everything this tracker emits is non-interactive.
    #[must_use]
    pub fn new(category: EventCategory, label: impl Into<String>, timing_secs: f64) -> Self {
        Self {
            category,
            label: label.into(),
            timing_secs,
            non_interactive: true,
        }
    }
}

/// One recorded scroll measurement in a session trace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSample {
    /// Milliseconds since session start.
    pub at_ms: u64,
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}
