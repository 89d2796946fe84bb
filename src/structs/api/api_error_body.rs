use serde::{Deserialize, Serialize};

/// Error payload some endpoints return on non-2xx responses. `detail`
/// overrides the canned user-facing message when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
