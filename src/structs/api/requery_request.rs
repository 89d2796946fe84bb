use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequeryRequest {
    pub session_id: String,
    pub message: String,
}
