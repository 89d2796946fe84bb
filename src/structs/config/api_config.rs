use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "ConfigHelper::default_max_poll_attempts")]
    pub max_poll_attempts: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            poll_interval_ms: ConfigHelper::default_poll_interval_ms(),
            max_poll_attempts: ConfigHelper::default_max_poll_attempts(),
        }
    }
}
