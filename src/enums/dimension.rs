use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::enums::sort_order::SortOrder;
use crate::structs::respondent::Respondent;

/// A selectable demographic or behavioral field on a respondent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[clap(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Gender,
    AgeGroup,
    Region,
    SubRegion,
    BirthYear,
    MaritalStatus,
    Occupation,
    Smoker,
    Drinker,
    HasVehicle,
}

impl Dimension {
    /// Raw field value for one respondent. `None` and empty strings are
    /// collapsed into the unknown bucket by the aggregator, never here.
    pub fn select(&self, respondent: &Respondent) -> Option<String> {
        let demo = &respondent.demographic_info;
        let behaviors = &respondent.behaviors_info;
        match self {
            Self::Gender => demo.gender.clone(),
            Self::AgeGroup => demo.age_group.clone(),
            Self::Region => demo.region.clone(),
            Self::SubRegion => demo.sub_region.clone(),
            Self::BirthYear => demo.birth_year.map(|y| y.to_string()),
            Self::MaritalStatus => demo.marital_status.clone(),
            Self::Occupation => demo.occupation.clone(),
            Self::Smoker => behaviors.smoker.clone(),
            Self::Drinker => behaviors.drinker.clone(),
            Self::HasVehicle => behaviors.has_vehicle.clone(),
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        match self {
            Self::AgeGroup => SortOrder::AgeOrdinal,
            Self::BirthYear => SortOrder::NumericAsc,
            _ => SortOrder::CountDesc,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::AgeGroup => "age_group",
            Self::Region => "region",
            Self::SubRegion => "sub_region",
            Self::BirthYear => "birth_year",
            Self::MaritalStatus => "marital_status",
            Self::Occupation => "occupation",
            Self::Smoker => "smoker",
            Self::Drinker => "drinker",
            Self::HasVehicle => "has_vehicle",
        }
    }
}
