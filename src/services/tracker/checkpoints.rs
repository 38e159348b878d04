//! Checkpoint definitions: named scroll-depth thresholds as document fractions

use crate::{Error, Result};

/// A named scroll-depth threshold expressed as a fraction of total document height.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub label: String,
    pub fraction: f64,
}

impl Checkpoint {
    #[must_use]
    pub fn new(label: impl Into<String>, fraction: f64) -> Self {
        Self {
            label: label.into(),
            fraction,
        }
    }

    /// Absolute pixel threshold for the given document height.
    ///
    /// Derived from the current height on every sample; lazy-loaded content
    /// can grow the document at any time, so thresholds are never cached.
    #[must_use]
    pub fn threshold_px(&self, document_height: f64) -> f64 {
        (document_height * self.fraction).floor()
    }
}

/// Ordered set of checkpoints, fixed for the lifetime of a tracker.
///
/// Scan order is definition order; crossing events fire in this order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointSet {
    checkpoints: Vec<Checkpoint>,
}

impl CheckpointSet {
    /// The canonical checkpoint ladder: 10%, 25%, 50%, 75%, 90%, 100%.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            checkpoints: vec![
                Checkpoint::new("10%", 0.10),
                Checkpoint::new("25%", 0.25),
                Checkpoint::new("50%", 0.50),
                Checkpoint::new("75%", 0.75),
                Checkpoint::new("90%", 0.90),
                Checkpoint::new("100%", 1.0),
            ],
        }
    }

    /// Build a custom checkpoint set, validating every definition up front.
    pub fn new(checkpoints: Vec<Checkpoint>) -> Result<Self> {
        if checkpoints.is_empty() {
            return Err(Error::InvalidInput(
                "checkpoint set must not be empty".to_string(),
            ));
        }

        for cp in &checkpoints {
            if cp.label.is_empty() {
                return Err(Error::InvalidInput(
                    "checkpoint label must not be empty".to_string(),
                ));
            }
            if !cp.fraction.is_finite() || cp.fraction <= 0.0 || cp.fraction > 1.0 {
                return Err(Error::InvalidInput(format!(
                    "checkpoint '{}' has fraction {} outside (0.0, 1.0]",
                    cp.label, cp.fraction
                )));
            }
        }

        // Labels must be unique; de-duplication is keyed on the label.
        for (i, cp) in checkpoints.iter().enumerate() {
            if checkpoints[..i].iter().any(|prev| prev.label == cp.label) {
                return Err(Error::InvalidInput(format!(
                    "duplicate checkpoint label '{}'",
                    cp.label
                )));
            }
        }

        Ok(Self { checkpoints })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Checkpoint> {
        self.checkpoints.iter()
    }
}

impl Default for CheckpointSet {
    fn default() -> Self {
        Self::canonical()
    }
}

impl<'a> IntoIterator for &'a CheckpointSet {
    type Item = &'a Checkpoint;
    type IntoIter = std::slice::Iter<'a, Checkpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
