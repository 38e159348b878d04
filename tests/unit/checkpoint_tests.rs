//! Unit tests for checkpoint definitions and validation

#[cfg(test)]
mod tests {
    use scrollmark::{
        Checkpoint, CheckpointSet, Error, MemorySink, ScrollTracker, TrackerConfig,
    };

    #[test]
    fn canonical_ladder_is_ascending() {
        let set = CheckpointSet::canonical();
        assert_eq!(set.len(), 6);

        let labels: Vec<&str> = set.iter().map(|cp| cp.label.as_str()).collect();
        assert_eq!(labels, ["10%", "25%", "50%", "75%", "90%", "100%"]);

        let fractions: Vec<f64> = set.iter().map(|cp| cp.fraction).collect();
        assert_eq!(fractions, [0.10, 0.25, 0.50, 0.75, 0.90, 1.0]);
    }

    #[test]
    fn default_set_is_the_canonical_ladder() {
        assert_eq!(CheckpointSet::default(), CheckpointSet::canonical());
    }

    #[test]
    fn thresholds_floor_to_whole_pixels() {
        let half = Checkpoint::new("50%", 0.5);
        assert_eq!(half.threshold_px(1000.0), 500.0);
        assert_eq!(half.threshold_px(999.0), 499.0);

        let full = Checkpoint::new("100%", 1.0);
        assert_eq!(full.threshold_px(10_000.0), 10_000.0);
    }

    #[test]
    fn custom_set_preserves_definition_order() {
        let set = CheckpointSet::new(vec![
            Checkpoint::new("half", 0.5),
            Checkpoint::new("intro", 0.1),
        ])
        .expect("valid set");

        let labels: Vec<&str> = set.iter().map(|cp| cp.label.as_str()).collect();
        assert_eq!(labels, ["half", "intro"]);
    }

    #[test]
    fn empty_set_is_rejected() {
        let err = CheckpointSet::new(vec![]).expect_err("empty set must fail");
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn out_of_range_fractions_are_rejected() {
        for fraction in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let result = CheckpointSet::new(vec![Checkpoint::new("bad", fraction)]);
            let err = result.expect_err("fraction outside (0, 1] must fail");
            assert!(
                err.to_string().contains("outside (0.0, 1.0]"),
                "unexpected message for fraction {fraction}: {err}"
            );
        }
    }

    #[test]
    fn empty_labels_are_rejected() {
        let err =
            CheckpointSet::new(vec![Checkpoint::new("", 0.5)]).expect_err("empty label must fail");
        assert!(err.to_string().contains("label must not be empty"));
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let err = CheckpointSet::new(vec![
            Checkpoint::new("50%", 0.5),
            Checkpoint::new("50%", 0.75),
        ])
        .expect_err("duplicate labels must fail");
        assert!(err.to_string().contains("duplicate checkpoint label"));
    }

    #[test]
    fn custom_set_drives_exhaustion_at_its_own_size() {
        let set = CheckpointSet::new(vec![
            Checkpoint::new("half", 0.5),
            Checkpoint::new("full", 1.0),
        ])
        .expect("valid set");

        let mut tracker = ScrollTracker::with_checkpoints(
            TrackerConfig::default(),
            set,
            Box::new(MemorySink::new()),
        );
        assert_eq!(tracker.checkpoint_count(), 2);

        let result = tracker
            .on_scroll_sample(9000.0, 1000.0, 10_000.0, 1.0)
            .expect("sample");
        assert!(result.done, "two-checkpoint session completes at its own size");
        assert_eq!(tracker.fired_labels(), ["half", "full"]);
    }
}
