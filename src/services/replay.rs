//! Offline replay of recorded scroll traces.
//!
//! Replay reconstructs a live session from a trace: each row first moves a
//! synthetic surface to its recorded position, then raises one payload-free
//! scroll notification at the recorded offset from session start. Throttling
//! and detachment therefore behave exactly as they would have live.

use crate::models::{ScrollSample, TrackedEvent};
use crate::services::monitor::throttle::DEFAULT_INTERVAL;
use crate::services::monitor::{MonitorPoll, SampleThrottler, ScrollMonitor, ScrollSurface};
use crate::services::sink::EventSink;
use crate::services::tracker::ScrollTracker;
use crate::{Error, Result, TrackerConfig};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Options governing a trace replay.
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub tracker: TrackerConfig,
    pub throttle_interval: Duration,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            throttle_interval: DEFAULT_INTERVAL,
        }
    }
}

/// Replay implementation of `ScrollSurface` exposing the most recently
/// applied trace row.
#[derive(Debug, Default)]
pub struct TraceSurface {
    scroll_top: f64,
    viewport_height: f64,
    document_height: f64,
}

impl TraceSurface {
    /// Move the surface to the position recorded in `sample`.
    pub fn apply(&mut self, sample: &ScrollSample) {
        self.scroll_top = sample.scroll_top;
        self.viewport_height = sample.viewport_height;
        self.document_height = sample.document_height;
    }
}

impl ScrollSurface for TraceSurface {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }
}

/// Aggregated outcome of one trace replay.
#[derive(Debug, Serialize)]
pub struct ReplaySummary {
    /// Rows in the trace.
    pub samples_total: u64,
    /// Notifications admitted by the throttler and processed as samples.
    pub samples_delivered: u64,
    /// Notifications refused by the throttler.
    pub samples_throttled: u64,
    /// Notifications raised after the monitor had detached.
    pub samples_ignored: u64,
    /// Events the sink retained, if it retains any.
    pub events: Vec<TrackedEvent>,
    /// Total events the sink accepted, baseline included.
    pub events_recorded: u64,
    /// Checkpoint labels fired, in firing order.
    pub fired_labels: Vec<String>,
    /// Deepest scroll depth present in the trace.
    pub max_scroll_depth_px: f64,
    /// Whether every checkpoint fired before the trace ended.
    pub done: bool,
    /// Trace offset at which the monitor detached, if it did.
    pub detached_at_secs: Option<f64>,
    /// Offset of the final trace row.
    pub duration_secs: f64,
}

/// Drive a recorded trace through a monitor and tracker.
///
/// # Errors
/// `Error::InvalidInput` if the trace rows are not ordered by `at_ms`;
/// tracker validation errors for malformed measurements; `Error::Io` if the
/// sink fails to finalize.
pub fn replay_trace(
    samples: &[ScrollSample],
    options: &ReplayOptions,
    sink: Box<dyn EventSink>,
) -> Result<ReplaySummary> {
    if let Some(pos) = samples.windows(2).position(|w| w[1].at_ms < w[0].at_ms) {
        return Err(Error::InvalidInput(format!(
            "trace rows must be ordered by at_ms (row {} goes back in time)",
            pos + 2
        )));
    }

    let tracker = ScrollTracker::create(options.tracker, sink);
    let throttler = SampleThrottler::with_interval(options.throttle_interval);
    let start = Instant::now();
    let mut monitor = ScrollMonitor::attach(TraceSurface::default(), tracker, throttler, start);

    let mut delivered = 0u64;
    let mut throttled = 0u64;
    let mut ignored = 0u64;
    let mut detached_at_secs = None;
    let mut max_scroll_depth_px = 0.0_f64;

    for sample in samples {
        max_scroll_depth_px = max_scroll_depth_px.max(sample.scroll_top + sample.viewport_height);

        monitor.surface_mut().apply(sample);
        match monitor.on_scroll_activity(start + Duration::from_millis(sample.at_ms))? {
            MonitorPoll::Sampled(result) => {
                delivered += 1;
                if result.done && detached_at_secs.is_none() {
                    detached_at_secs = Some(sample.at_ms as f64 / 1000.0);
                }
            }
            MonitorPoll::Throttled => throttled += 1,
            MonitorPoll::Detached => ignored += 1,
        }
    }

    let total = samples.len() as u64;
    log::debug!(
        "replayed {total} rows: {delivered} delivered, {throttled} throttled, {ignored} ignored"
    );

    let done = monitor.tracker().is_exhausted();
    let fired_labels = monitor.tracker().fired_labels().to_vec();
    let duration_secs = samples.last().map_or(0.0, |s| s.at_ms as f64 / 1000.0);
    let report = monitor.finish()?;

    Ok(ReplaySummary {
        samples_total: total,
        samples_delivered: delivered,
        samples_throttled: throttled,
        samples_ignored: ignored,
        events: report.events,
        events_recorded: report.recorded,
        fired_labels,
        max_scroll_depth_px,
        done,
        detached_at_secs,
        duration_secs,
    })
}
