//! Aggregation over recorded event logs

use crate::models::{EventCategory, TrackedEvent};
use crate::services::tracker::BASELINE_LABEL;
use serde::Serialize;

/// First-seen timing for one checkpoint label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointTiming {
    pub label: String,
    pub at_secs: f64,
}

/// Summary of one recorded event log
#[derive(Debug, Default, Serialize)]
pub struct EventLogReport {
    pub total_events: u64,
    pub baseline_events: u64,
    /// Percent events excluding the baseline
    pub percent_events: u64,
    pub pixel_events: u64,
    /// Non-baseline percent labels in order of first appearance
    pub fired_labels: Vec<String>,
    /// Last fired percent label; trackers emit in ladder order, so this is
    /// the deepest one for well-formed logs
    pub deepest_checkpoint: Option<String>,
    /// Highest pixel band reported
    pub deepest_pixel_band: Option<u64>,
    /// First-seen timing per checkpoint label; zeros when the session did
    /// not measure timing
    pub time_to_checkpoint: Vec<CheckpointTiming>,
}

/// Aggregate a tracked-event log into counts and depth milestones
#[must_use]
pub fn summarize_events(events: &[TrackedEvent]) -> EventLogReport {
    let mut report = EventLogReport {
        total_events: events.len() as u64,
        ..Default::default()
    };

    for event in events {
        match event.category {
            EventCategory::PercentScrolled if event.label == BASELINE_LABEL => {
                report.baseline_events += 1;
            }
            EventCategory::PercentScrolled => {
                report.percent_events += 1;
                if !report.fired_labels.iter().any(|label| label == &event.label) {
                    report.fired_labels.push(event.label.clone());
                    report.time_to_checkpoint.push(CheckpointTiming {
                        label: event.label.clone(),
                        at_secs: event.timing_secs,
                    });
                }
            }
            EventCategory::PixelsScrolled => {
                report.pixel_events += 1;
                match event.label.parse::<u64>() {
                    Ok(band) => {
                        report.deepest_pixel_band =
                            Some(report.deepest_pixel_band.map_or(band, |deepest| deepest.max(band)));
                    }
                    Err(_) => {
                        log::warn!("ignoring malformed pixel band label '{}'", event.label);
                    }
                }
            }
        }
    }

    report.deepest_checkpoint = report.fired_labels.last().cloned();
    report
}
