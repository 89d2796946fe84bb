use serde::{Deserialize, Serialize};
use crate::structs::respondent::Respondent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub task_id: Option<String>,

    #[serde(default)]
    pub respondents: Vec<Respondent>,
}
