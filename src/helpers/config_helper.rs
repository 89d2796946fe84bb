use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS, MAX_POLL_ATTEMPTS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_poll_interval_ms() -> u64 {
        DEFAULT_POLL_INTERVAL_MS
    }

    pub fn default_max_poll_attempts() -> u32 {
        MAX_POLL_ATTEMPTS
    }

    pub fn default_output_dir() -> String {
        "./panelscope-exports".to_string()
    }
}
