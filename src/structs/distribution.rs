use serde::{Deserialize, Serialize};

/// One row of a frequency table: label, absolute count and percentage of the
/// total (0-100, two decimal places). Recomputed on every change of the
/// underlying records, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub label: String,
    pub value: u64,
    pub percentage: f64,
}

impl Distribution {
    pub fn new(label: String, value: u64, percentage: f64) -> Self {
        Self { label, value, percentage }
    }
}
