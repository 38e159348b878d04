//! Sampling rate control for scroll activity.

use std::time::{Duration, Instant};

const MIN_INTERVAL: Duration = Duration::from_millis(16);

/// Admission interval used when the caller does not supply one.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Leading-edge time throttler governing how often scroll activity is
/// turned into a tracker sample.
#[derive(Debug)]
pub struct SampleThrottler {
    interval: Duration,
    last_admit: Option<Instant>,
}

impl Default for SampleThrottler {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleThrottler {
    /// Construct a throttler using the default interval of 500 milliseconds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_INTERVAL)
    }

    /// Construct a throttler with the supplied admission interval.
    #[must_use]
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            last_admit: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Decide whether activity at `now` may produce a sample.
    ///
    /// Leading edge: the first call is always admitted, and each admission
    /// opens a window of `interval` during which further calls are refused.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.last_admit {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_admit = Some(now);
                true
            }
        }
    }
}
