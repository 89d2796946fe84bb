use std::fmt;
use serde::{Deserialize, Serialize};

/// Fixed UI grouping for the visualization sidebar. The derived ordering is
/// also the display order of the category sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Demographics,
    Region,
    Education,
    Income,
    Lifestyle,
    Consumption,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Demographics => "인구통계",
            Category::Region => "지역",
            Category::Education => "학력",
            Category::Income => "소득",
            Category::Lifestyle => "라이프스타일",
            Category::Consumption => "소비",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Demographics => "demographics",
            Category::Region => "region",
            Category::Education => "education",
            Category::Income => "income",
            Category::Lifestyle => "lifestyle",
            Category::Consumption => "consumption",
        };
        write!(f, "{}", name)
    }
}
