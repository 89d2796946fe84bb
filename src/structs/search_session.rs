use crate::structs::respondent::Respondent;

/// Client-side state for one search session. A new search replaces the whole
/// session before anything is displayed, so a stale in-flight result can
/// never leak into the output of a newer query.
#[derive(Debug, Clone)]
pub struct SearchSession {
    pub session_id: String,
    pub query: String,
    pub respondents: Vec<Respondent>,
}

impl SearchSession {
    pub fn new(session_id: String, query: String, respondents: Vec<Respondent>) -> Self {
        Self { session_id, query, respondents }
    }

    pub fn replace_respondents(&mut self, respondents: Vec<Respondent>) {
        self.respondents = respondents;
    }
}
