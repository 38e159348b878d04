//! Unit tests for event-log aggregation

#[cfg(test)]
mod tests {
    use scrollmark::services::report::summarize_events;
    use scrollmark::{EventCategory, TrackedEvent};

    fn percent(label: &str, at_secs: f64) -> TrackedEvent {
        TrackedEvent::new(EventCategory::PercentScrolled, label, at_secs)
    }

    fn pixels(band: &str) -> TrackedEvent {
        TrackedEvent::new(EventCategory::PixelsScrolled, band, 0.0)
    }

    #[test]
    fn counts_and_milestones() {
        let events = vec![
            percent("Baseline", 0.0),
            percent("10%", 1.2),
            pixels("250"),
            percent("25%", 3.4),
            pixels("500"),
        ];

        let report = summarize_events(&events);
        assert_eq!(report.total_events, 5);
        assert_eq!(report.baseline_events, 1);
        assert_eq!(report.percent_events, 2);
        assert_eq!(report.pixel_events, 2);
        assert_eq!(report.fired_labels, ["10%", "25%"]);
        assert_eq!(report.deepest_checkpoint.as_deref(), Some("25%"));
        assert_eq!(report.deepest_pixel_band, Some(500));
    }

    #[test]
    fn empty_log_reports_nothing() {
        let report = summarize_events(&[]);
        assert_eq!(report.total_events, 0);
        assert!(report.fired_labels.is_empty());
        assert!(report.deepest_checkpoint.is_none());
        assert!(report.deepest_pixel_band.is_none());
        assert!(report.time_to_checkpoint.is_empty());
    }

    #[test]
    fn time_to_checkpoint_keeps_first_sighting() {
        let events = vec![
            percent("10%", 1.5),
            // A duplicate should never appear in a well-formed log, but the
            // report must not double-count one.
            percent("10%", 9.9),
        ];

        let report = summarize_events(&events);
        assert_eq!(report.percent_events, 2);
        assert_eq!(report.fired_labels, ["10%"]);
        assert_eq!(report.time_to_checkpoint.len(), 1);
        assert_eq!(report.time_to_checkpoint[0].label, "10%");
        assert_eq!(report.time_to_checkpoint[0].at_secs, 1.5);
    }

    #[test]
    fn malformed_pixel_bands_are_skipped() {
        let events = vec![pixels("250"), pixels("not-a-band")];

        let report = summarize_events(&events);
        assert_eq!(report.pixel_events, 2);
        assert_eq!(report.deepest_pixel_band, Some(250));
    }

    #[test]
    fn bands_compare_numerically() {
        let events = vec![pixels("1000"), pixels("750")];
        let report = summarize_events(&events);
        assert_eq!(report.deepest_pixel_band, Some(1000));
    }
}
