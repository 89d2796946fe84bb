use std::cmp::Ordering;
use std::collections::HashMap;
use crate::config::constants::{AGE_BUCKET_ORDER, UNKNOWN_LABEL};
use crate::enums::dimension::Dimension;
use crate::enums::sort_order::SortOrder;
use crate::structs::distribution::Distribution;
use crate::structs::respondent::Respondent;

/// Pure group-by/count/percentage reduction over the respondent list. Safe
/// to call on every underlying data change; no side effects, no failure
/// modes. Missing and empty field values land in the unknown bucket, so
/// every respondent contributes exactly one count per dimension.
pub struct Aggregator;

impl Aggregator {

    pub fn aggregate_dimension(records: &[Respondent], dimension: Dimension) -> Vec<Distribution> {
        Self::aggregate(records, |r| dimension.select(r), dimension.sort_order())
    }

    pub fn aggregate<F>(records: &[Respondent], selector: F, order: SortOrder) -> Vec<Distribution>
    where
        F: Fn(&Respondent) -> Option<String>,
    {
        let total = records.len();
        if total == 0 {
            return Vec::new();
        }

        let mut counts: HashMap<String, u64> = HashMap::new();
        // Insertion order doubles as the tie-break for count-descending sorts.
        let mut first_seen: Vec<String> = Vec::new();

        for record in records {
            let label = normalize_label(selector(record));
            if !counts.contains_key(&label) {
                first_seen.push(label.clone());
            }
            *counts.entry(label).or_insert(0) += 1;
        }

        let mut entries: Vec<Distribution> = first_seen
            .into_iter()
            .map(|label| {
                let value = counts[&label];
                let percentage = round_two(value as f64 / total as f64 * 100.0);
                Distribution::new(label, value, percentage)
            })
            .collect();

        sort_entries(&mut entries, order);
        entries
    }
}

/// Collapses `None` and empty strings into the unknown bucket.
pub fn normalize_label(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => UNKNOWN_LABEL.to_string(),
    }
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sort_entries(entries: &mut [Distribution], order: SortOrder) {
    match order {
        // sort_by is stable, so equal ranks and equal counts keep their
        // first-encountered order.
        SortOrder::AgeOrdinal => {
            entries.sort_by_key(|e| age_bucket_rank(&e.label));
        }
        SortOrder::CountDesc => {
            entries.sort_by(|a, b| b.value.cmp(&a.value));
        }
        SortOrder::NumericAsc => {
            entries.sort_by(|a, b| numeric_label_cmp(&a.label, &b.label));
        }
    }
}

/// Known age buckets in ordinal position, unknown bucket after them,
/// unrecognized labels after everything.
fn age_bucket_rank(label: &str) -> usize {
    if let Some(position) = AGE_BUCKET_ORDER.iter().position(|b| *b == label) {
        return position;
    }
    if label == UNKNOWN_LABEL {
        return AGE_BUCKET_ORDER.len();
    }
    AGE_BUCKET_ORDER.len() + 1
}

/// Numeric labels ascending, non-numeric labels after all numeric ones in
/// string order.
fn numeric_label_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
