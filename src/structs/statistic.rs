use serde::{Deserialize, Serialize};

/// Backend-provided aggregate for one survey question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(default)]
    pub question_description: Option<String>,

    #[serde(default)]
    pub answer_distribution: Vec<AnswerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub answer: String,

    #[serde(default)]
    pub count: u64,

    #[serde(default)]
    pub percentage: f64,
}
