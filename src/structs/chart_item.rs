use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::enums::category::Category;
use crate::enums::chart_type::ChartType;
use crate::structs::distribution::Distribution;

/// One chart ready for rendering: classified type, display title and the
/// frequency data behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartItem {
    pub key: String,
    pub title: String,
    pub data: Vec<Distribution>,
    pub chart_type: ChartType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

/// One display row inside a category section: one or two charts side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRow {
    pub charts: Vec<ChartItem>,
    pub cols: u8,
}

pub type CategoryGroups = BTreeMap<Category, Vec<ChartRow>>;
