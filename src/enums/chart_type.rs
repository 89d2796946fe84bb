use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Pie,
    Bar,
    Treemap,
    Area,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ChartType::Pie => "pie",
            ChartType::Bar => "bar",
            ChartType::Treemap => "treemap",
            ChartType::Area => "area",
        };
        write!(f, "{}", name)
    }
}
