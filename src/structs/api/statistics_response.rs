use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::structs::statistic::Statistic;

/// Aggregate statistics keyed by question id (`q_gender`, `q_region`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub statistics: BTreeMap<String, Statistic>,
}
