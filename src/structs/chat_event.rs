use serde::{Deserialize, Serialize};
use crate::structs::respondent::Respondent;

/// One parsed event from the re-query SSE stream.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// Incremental assistant text.
    Delta(String),
    /// Refined respondent list replacing the current session result.
    Result(Vec<Respondent>),
    /// End of stream.
    Done,
}

/// Raw wire shape of one `data:` line. The event discriminator is the
/// `type` field; unrecognized types are ignored by the parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEventData {
    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub respondents: Option<Vec<Respondent>>,
}
