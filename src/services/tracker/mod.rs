//! Checkpoint-crossing detection over a live scroll position.
//!
//! The tracker owns all mutable session state and is driven one sample at a
//! time by a rate-limited caller. Shared invariants:
//!
//! - A checkpoint label is reported at most once per tracker lifetime.
//! - The fired set only grows; once every checkpoint has fired the tracker
//!   is exhausted and ignores further samples (one-way transition).
//! - Thresholds are derived from the document height of the current sample,
//!   never cached across samples.
//! - Sink delivery is best-effort and never gates state updates.

pub mod checkpoints;

use self::checkpoints::CheckpointSet;
use crate::models::{EventCategory, TrackedEvent};
use crate::services::sink::{EventSink, SinkReport};
use crate::{Error, Result, TrackerConfig};

/// Label of the zeroth event reported once at construction.
pub const BASELINE_LABEL: &str = "Baseline";

/// Width of one "Pixels Scrolled" reporting band, in pixels.
pub const PIXEL_BAND_PX: f64 = 250.0;

/// Outcome of one processed scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleResult {
    /// All checkpoints have fired; the caller should detach its listener.
    pub done: bool,
    /// Number of events this sample emitted.
    pub events_emitted: usize,
}

/// Stateful scroll-depth tracker for a single page view.
///
/// Multiple trackers can coexist (for example one per tracked container);
/// each owns its fired set and high-water mark exclusively.
pub struct ScrollTracker {
    config: TrackerConfig,
    checkpoints: CheckpointSet,
    fired: Vec<String>,
    pixel_high_water: f64,
    last_pixel_band: Option<u64>,
    last_elapsed_secs: f64,
    sink: Box<dyn EventSink>,
}

impl ScrollTracker {
    /// Create a tracker over the canonical checkpoint ladder.
    ///
    /// Emits the baseline event through the sink before returning: page load
    /// is reported as a zeroth checkpoint regardless of configuration.
    #[must_use]
    pub fn create(config: TrackerConfig, sink: Box<dyn EventSink>) -> Self {
        Self::with_checkpoints(config, CheckpointSet::canonical(), sink)
    }

    /// Create a tracker over a custom checkpoint set.
    #[must_use]
    pub fn with_checkpoints(
        config: TrackerConfig,
        checkpoints: CheckpointSet,
        sink: Box<dyn EventSink>,
    ) -> Self {
        let mut tracker = Self {
            config,
            checkpoints,
            fired: Vec::new(),
            pixel_high_water: 0.0,
            last_pixel_band: None,
            last_elapsed_secs: 0.0,
            sink,
        };

        tracker.emit(EventCategory::PercentScrolled, BASELINE_LABEL, 0.0);
        tracker
    }

    /// Process one scroll sample.
    ///
    /// `scroll_top` is the document offset of the top of the viewport and
    /// `elapsed_secs` the time since session start, which must never
    /// decrease across calls. Returns whether the tracker is exhausted so
    /// the caller can detach its scroll listener.
    ///
    /// # Errors
    /// `Error::InvalidSample` if any measurement is non-finite or out of
    /// range; a rejected sample leaves the tracker state untouched.
    pub fn on_scroll_sample(
        &mut self,
        scroll_top: f64,
        viewport_height: f64,
        document_height: f64,
        elapsed_secs: f64,
    ) -> Result<SampleResult> {
        // Exhausted trackers ignore everything, malformed samples included.
        if self.is_exhausted() {
            return Ok(SampleResult {
                done: true,
                events_emitted: 0,
            });
        }

        self.validate_sample(scroll_top, viewport_height, document_height, elapsed_secs)?;
        self.last_elapsed_secs = elapsed_secs;

        // Scroll depth is the document offset of the bottom of the viewport.
        let scroll_depth = scroll_top + viewport_height;
        let mut emitted = 0;

        if self.config.track_percent_scrolled {
            emitted += self.fire_crossed_checkpoints(scroll_depth, document_height, elapsed_secs);
        }

        if self.config.track_pixels_scrolled {
            emitted += self.advance_pixel_high_water(scroll_depth, elapsed_secs);
        }

        Ok(SampleResult {
            done: self.is_exhausted(),
            events_emitted: emitted,
        })
    }

    /// True once every checkpoint has fired; a one-way transition.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.fired.len() >= self.checkpoints.len()
    }

    /// Whether a checkpoint label has already been reported.
    #[must_use]
    pub fn has_fired(&self, label: &str) -> bool {
        self.fired.iter().any(|fired| fired == label)
    }

    /// Checkpoint labels reported so far, in firing order.
    #[must_use]
    pub fn fired_labels(&self) -> &[String] {
        &self.fired
    }

    /// Deepest pixel position observed while pixel tracking is enabled.
    #[must_use]
    pub fn pixel_high_water(&self) -> f64 {
        self.pixel_high_water
    }

    #[must_use]
    pub fn checkpoint_count(&self) -> usize {
        self.checkpoints.len()
    }

    #[must_use]
    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    /// Consume the tracker and finalize its sink.
    pub fn finish(self) -> std::io::Result<SinkReport> {
        self.sink.finish()
    }

    /// Single pass over the checkpoint ladder in definition order. A fast
    /// jump can satisfy several checkpoints at once; each fires its own
    /// event, in ladder order.
    fn fire_crossed_checkpoints(
        &mut self,
        scroll_depth: f64,
        document_height: f64,
        elapsed_secs: f64,
    ) -> usize {
        let crossed: Vec<String> = self
            .checkpoints
            .iter()
            .filter(|cp| {
                !self.has_fired(&cp.label) && scroll_depth >= cp.threshold_px(document_height)
            })
            .map(|cp| cp.label.clone())
            .collect();

        let count = crossed.len();
        for label in crossed {
            self.emit(EventCategory::PercentScrolled, &label, elapsed_secs);
            self.fired.push(label);
        }

        count
    }

    /// Advance the pixel high-water mark and report newly reached bands.
    fn advance_pixel_high_water(&mut self, scroll_depth: f64, elapsed_secs: f64) -> usize {
        if scroll_depth <= self.pixel_high_water {
            return 0;
        }
        self.pixel_high_water = scroll_depth;

        // A deeper sample inside an already-reported band stays silent.
        let band = pixel_band(scroll_depth);
        if self.last_pixel_band == Some(band) {
            return 0;
        }
        self.last_pixel_band = Some(band);

        self.emit(EventCategory::PixelsScrolled, &band.to_string(), elapsed_secs);
        1
    }

    /// Send one event through the sink.
    ///
    /// A sink failure is logged and dropped; checkpoint state must not
    /// depend on delivery.
    fn emit(&mut self, category: EventCategory, label: &str, elapsed_secs: f64) {
        let timing_secs = if self.config.track_timing {
            elapsed_secs
        } else {
            0.0
        };

        let event = TrackedEvent::new(category, label, timing_secs);
        log::debug!("event: {category} '{label}' at {timing_secs}s");

        if let Err(err) = self.sink.send(&event) {
            log::warn!("event sink rejected {category} '{label}': {err}");
        }
    }

    fn validate_sample(
        &self,
        scroll_top: f64,
        viewport_height: f64,
        document_height: f64,
        elapsed_secs: f64,
    ) -> Result<()> {
        let all_finite = scroll_top.is_finite()
            && viewport_height.is_finite()
            && document_height.is_finite()
            && elapsed_secs.is_finite();
        if !all_finite {
            return Err(Error::InvalidSample(
                "measurements must be finite numbers".to_string(),
            ));
        }
        if scroll_top < 0.0 {
            return Err(Error::InvalidSample(format!(
                "scroll_top must be >= 0, got {scroll_top}"
            )));
        }
        if viewport_height <= 0.0 {
            return Err(Error::InvalidSample(format!(
                "viewport_height must be > 0, got {viewport_height}"
            )));
        }
        if document_height <= 0.0 {
            return Err(Error::InvalidSample(format!(
                "document_height must be > 0, got {document_height}"
            )));
        }
        if elapsed_secs < 0.0 {
            return Err(Error::InvalidSample(format!(
                "elapsed_secs must be >= 0, got {elapsed_secs}"
            )));
        }
        if elapsed_secs < self.last_elapsed_secs {
            return Err(Error::InvalidSample(format!(
                "elapsed_secs regressed from {} to {elapsed_secs}",
                self.last_elapsed_secs
            )));
        }
        Ok(())
    }
}

/// Floor a scroll depth to its 250 px reporting band.
#[must_use]
pub fn pixel_band(scroll_depth: f64) -> u64 {
    let bands = (scroll_depth / PIXEL_BAND_PX).floor();
    bands as u64 * PIXEL_BAND_PX as u64
}
