use crate::config::constants::UNKNOWN_LABEL;
use crate::enums::dimension::Dimension;
use crate::structs::respondent::Respondent;

/// Drill-down predicate behind chart clicks: exact match on the field that
/// produced a distribution bucket.
pub struct RecordFilter;

impl RecordFilter {

    pub fn filter_by_label<'a>(
        records: &'a [Respondent],
        dimension: Dimension,
        label: &str,
    ) -> Vec<&'a Respondent> {
        records
            .iter()
            .filter(|record| Self::matches(record, dimension, label))
            .collect()
    }

    /// The unknown bucket matches on the null-check, never on the literal
    /// label string: a field holding the text "알 수 없음" is a real value
    /// and does not belong to the unknown bucket.
    pub fn matches(record: &Respondent, dimension: Dimension, label: &str) -> bool {
        let value = dimension.select(record);
        if label == UNKNOWN_LABEL {
            match value {
                None => true,
                Some(v) => v.is_empty(),
            }
        } else {
            value.as_deref() == Some(label)
        }
    }
}
