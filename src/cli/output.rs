//! Output formatting for CLI

use crate::services::replay::ReplaySummary;
use crate::services::report::EventLogReport;

/// Print a replay summary as human-readable text
pub fn print_replay_text(summary: &ReplaySummary) {
    println!(
        "Replayed {} samples over {:.1}s",
        summary.samples_total, summary.duration_secs
    );
    println!(
        "  delivered {}, throttled {}, ignored {}",
        summary.samples_delivered, summary.samples_throttled, summary.samples_ignored
    );
    println!();
    println!("Events recorded: {}", summary.events_recorded);

    if summary.fired_labels.is_empty() {
        println!("Checkpoints fired: none");
    } else {
        println!("Checkpoints fired: {}", summary.fired_labels.join(", "));
    }

    println!("Deepest scroll depth: {:.0} px", summary.max_scroll_depth_px);

    match summary.detached_at_secs {
        Some(at) => println!("All checkpoints fired; detached at {at:.1}s"),
        None => println!("Trace ended with the monitor still attached"),
    }

    if !summary.events.is_empty() {
        println!();
        println!("{:<18} {:<10} {:>10}", "Category", "Label", "Timing");
        println!("{}", "─".repeat(40));
        for event in &summary.events {
            println!(
                "{:<18} {:<10} {:>9.2}s",
                event.category.as_str(),
                event.label,
                event.timing_secs
            );
        }
    }
}

/// Format a replay summary as JSON
#[must_use]
pub fn format_replay_json(summary: &ReplaySummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

/// Print an event-log report as human-readable text
pub fn print_report_text(report: &EventLogReport) {
    println!(
        "Events: {} total ({} baseline, {} percent, {} pixel)",
        report.total_events, report.baseline_events, report.percent_events, report.pixel_events
    );

    if report.fired_labels.is_empty() {
        println!("Checkpoints fired: none");
    } else {
        println!("Checkpoints fired: {}", report.fired_labels.join(", "));
    }

    if let Some(deepest) = &report.deepest_checkpoint {
        println!("Deepest checkpoint: {deepest}");
    }
    if let Some(band) = report.deepest_pixel_band {
        println!("Deepest pixel band: {band} px");
    }

    if !report.time_to_checkpoint.is_empty() {
        println!();
        println!("{:<10} {:>12}", "Checkpoint", "Reached at");
        println!("{}", "─".repeat(23));
        for timing in &report.time_to_checkpoint {
            println!("{:<10} {:>11.2}s", timing.label, timing.at_secs);
        }
    }
}

/// Format an event-log report as JSON
#[must_use]
pub fn format_report_json(report: &EventLogReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
