//! Listener attachment and session lifecycle.
//!
//! `ScrollMonitor` is the glue between a host that can announce "the user
//! scrolled" and the tracker that decides what that means. Notifications
//! carry no payload; measurements are pulled from the `ScrollSurface` only
//! when the throttler admits a sample.

pub mod throttle;

pub use self::throttle::SampleThrottler;

use crate::Result;
use crate::services::sink::SinkReport;
use crate::services::tracker::{SampleResult, ScrollTracker};
use std::time::Instant;

/// Pull-based access to the host's current scroll measurements.
///
/// Implementations are queried at sample time only and are expected to
/// reflect the live position at the moment of the call.
pub trait ScrollSurface {
    /// Document offset of the top of the viewport, in pixels.
    fn scroll_top(&self) -> f64;

    /// Height of the visible viewport, in pixels.
    fn viewport_height(&self) -> f64;

    /// Total height of the document, in pixels.
    fn document_height(&self) -> f64;
}

/// Outcome of one scroll notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorPoll {
    /// The notification was admitted and processed as a sample.
    Sampled(SampleResult),
    /// The notification fell inside the throttle window; the surface was
    /// not queried.
    Throttled,
    /// The monitor has detached; notifications are ignored.
    Detached,
}

/// Drives a tracker from rate-limited scroll notifications.
pub struct ScrollMonitor<S> {
    surface: S,
    tracker: ScrollTracker,
    throttler: SampleThrottler,
    started_at: Instant,
    attached: bool,
}

impl<S: ScrollSurface> ScrollMonitor<S> {
    /// Attach to a surface, capturing `now` as the session start.
    #[must_use]
    pub fn attach(
        surface: S,
        tracker: ScrollTracker,
        throttler: SampleThrottler,
        now: Instant,
    ) -> Self {
        Self {
            surface,
            tracker,
            throttler,
            started_at: now,
            attached: true,
        }
    }

    /// Handle one payload-free scroll notification observed at `now`.
    ///
    /// Detachment is permanent: once the tracker reports done, every later
    /// notification answers `Detached` without touching throttler, surface
    /// or tracker.
    ///
    /// # Errors
    /// Propagates tracker validation errors. The monitor stays attached so
    /// a later well-formed notification is still processed.
    pub fn on_scroll_activity(&mut self, now: Instant) -> Result<MonitorPoll> {
        if !self.attached {
            return Ok(MonitorPoll::Detached);
        }
        if !self.throttler.admit(now) {
            return Ok(MonitorPoll::Throttled);
        }

        let elapsed_secs = now.saturating_duration_since(self.started_at).as_secs_f64();
        let result = self.tracker.on_scroll_sample(
            self.surface.scroll_top(),
            self.surface.viewport_height(),
            self.surface.document_height(),
            elapsed_secs,
        )?;

        if result.done {
            log::debug!("all checkpoints fired after {elapsed_secs:.3}s, detaching");
            self.attached = false;
        }

        Ok(MonitorPoll::Sampled(result))
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    /// Stop processing notifications without consuming the monitor.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Consume the monitor and finalize the tracker's sink.
    pub fn finish(self) -> std::io::Result<SinkReport> {
        self.tracker.finish()
    }
}
