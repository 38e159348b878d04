//! Integration test for monitor attachment and pull-based sampling

use scrollmark::{
    MemorySink, MonitorPoll, SampleThrottler, ScrollMonitor, ScrollSurface, ScrollTracker,
    TrackerConfig,
};
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Surface that counts how often its position is pulled.
struct ProbeSurface {
    scroll_top: Cell<f64>,
    reads: Cell<u64>,
}

impl ProbeSurface {
    fn new(scroll_top: f64) -> Self {
        Self {
            scroll_top: Cell::new(scroll_top),
            reads: Cell::new(0),
        }
    }
}

impl ScrollSurface for ProbeSurface {
    fn scroll_top(&self) -> f64 {
        self.reads.set(self.reads.get() + 1);
        self.scroll_top.get()
    }

    fn viewport_height(&self) -> f64 {
        1000.0
    }

    fn document_height(&self) -> f64 {
        10_000.0
    }
}

fn monitor_at(
    surface: ProbeSurface,
    config: TrackerConfig,
    t0: Instant,
) -> ScrollMonitor<ProbeSurface> {
    let tracker = ScrollTracker::create(config, Box::new(MemorySink::new()));
    ScrollMonitor::attach(surface, tracker, SampleThrottler::new(), t0)
}

#[test]
fn test_throttled_notifications_do_not_pull_measurements() {
    let t0 = Instant::now();
    let mut monitor = monitor_at(ProbeSurface::new(0.0), TrackerConfig::default(), t0);

    let poll = monitor.on_scroll_activity(t0).expect("activity");
    assert!(matches!(poll, MonitorPoll::Sampled(_)));
    assert_eq!(monitor.surface().reads.get(), 1);

    let poll = monitor
        .on_scroll_activity(t0 + Duration::from_millis(100))
        .expect("activity");
    assert!(matches!(poll, MonitorPoll::Throttled));
    assert_eq!(
        monitor.surface().reads.get(),
        1,
        "throttled notifications must not read the surface"
    );

    let poll = monitor
        .on_scroll_activity(t0 + Duration::from_millis(500))
        .expect("activity");
    assert!(matches!(poll, MonitorPoll::Sampled(_)));
    assert_eq!(monitor.surface().reads.get(), 2);
}

#[test]
fn test_detach_after_done_is_permanent() {
    let t0 = Instant::now();
    let mut monitor = monitor_at(ProbeSurface::new(9000.0), TrackerConfig::default(), t0);

    let poll = monitor.on_scroll_activity(t0).expect("activity");
    let MonitorPoll::Sampled(result) = poll else {
        panic!("expected a sampled poll, got {poll:?}");
    };
    assert!(result.done);
    assert!(!monitor.is_attached());

    // Long after the throttle window reopens, the monitor still refuses to look.
    let poll = monitor
        .on_scroll_activity(t0 + Duration::from_secs(60))
        .expect("activity");
    assert!(matches!(poll, MonitorPoll::Detached));
    assert_eq!(monitor.surface().reads.get(), 1);
}

#[test]
fn test_elapsed_derives_from_attach_instant() {
    let t0 = Instant::now();
    let config = TrackerConfig {
        track_timing: true,
        ..TrackerConfig::default()
    };
    let mut monitor = monitor_at(ProbeSurface::new(1000.0), config, t0);

    monitor
        .on_scroll_activity(t0 + Duration::from_millis(1500))
        .expect("activity");

    let report = monitor.finish().expect("finish monitor");
    let ten = report
        .events
        .iter()
        .find(|e| e.label == "10%")
        .expect("10% fired");
    assert_eq!(ten.timing_secs, 1.5);
}

#[test]
fn test_manual_detach_stops_processing() {
    let t0 = Instant::now();
    let mut monitor = monitor_at(ProbeSurface::new(0.0), TrackerConfig::default(), t0);

    monitor.detach();
    assert!(!monitor.is_attached());

    let poll = monitor.on_scroll_activity(t0).expect("activity");
    assert!(matches!(poll, MonitorPoll::Detached));
    assert_eq!(monitor.surface().reads.get(), 0);
}

#[test]
fn test_surface_position_is_read_live() {
    let t0 = Instant::now();
    let mut monitor = monitor_at(ProbeSurface::new(0.0), TrackerConfig::default(), t0);

    monitor.on_scroll_activity(t0).expect("activity");
    monitor.surface_mut().scroll_top.set(4000.0);
    monitor
        .on_scroll_activity(t0 + Duration::from_millis(600))
        .expect("activity");

    assert_eq!(monitor.tracker().fired_labels(), ["10%", "25%", "50%"]);
}
