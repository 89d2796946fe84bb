use serde::{Deserialize, Serialize};

/// Ordering policy applied to an aggregated distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Fixed ordinal age-bucket order, unknown bucket last.
    AgeOrdinal,
    /// Descending by count, ties broken by first-encountered order.
    CountDesc,
    /// Numeric labels ascending, non-numeric labels after them.
    NumericAsc,
}
