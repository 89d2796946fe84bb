use serde::{Deserialize, Serialize};

/// One panel respondent as returned by the search API. Every nested field is
/// optional: a missing `demographic_info` or `behaviors_info` object
/// deserializes to all-`None` defaults and ends up in unknown buckets
/// downstream instead of failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Respondent {
    pub user_id: String,

    #[serde(default)]
    pub score: f64,

    #[serde(default)]
    pub demographic_info: DemographicInfo,

    #[serde(default)]
    pub behaviors_info: BehaviorsInfo,

    #[serde(default)]
    pub survey_datetime: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemographicInfo {
    #[serde(default)]
    pub age_group: Option<String>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub sub_region: Option<String>,

    #[serde(default)]
    pub birth_year: Option<i32>,

    #[serde(default)]
    pub marital_status: Option<String>,

    #[serde(default)]
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorsInfo {
    #[serde(default)]
    pub smoker: Option<String>,

    #[serde(default)]
    pub drinker: Option<String>,

    #[serde(default)]
    pub has_vehicle: Option<String>,
}
