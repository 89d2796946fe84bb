use std::fs;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{PanelError, PanelResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn load() -> PanelResult<Config> {
        let config_location = dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_default();

        if config_location.exists() {
            println!("📋 Loading config from: {}", config_location.display());
            let content = fs::read_to_string(&config_location).map_err(|e| {
                PanelError::ConfigurationFileError {
                    path: config_location.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let config: Config = toml::from_str(&content)?;
            Self::validate_config(&config)?;
            return Ok(config);
        }

        log::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    pub fn create_sample_config() -> PanelResult<()> {
        let sample_config = r#"# PanelScope Configuration

[api]
# Base URL of the survey-panel analytics backend
base_url = "http://localhost:8000"

# Per-request timeout (seconds)
timeout_secs = 30

# Async job status polling
poll_interval_ms = 1000
max_poll_attempts = 30

[export]
# Directory for CSV exports
output_dir = "./panelscope-exports"
"#;
        let config_dir = dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME))
            .ok_or_else(|| PanelError::config_error(
                "Could not resolve home directory",
                None,
                Some("Set HOME and retry"),
            ))?;
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        fs::create_dir_all(&config_dir)?;
        fs::write(&config_file, sample_config)?;
        println!("✅ Created sample config at: {}", config_file.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> PanelResult<()> {
        if config.api.base_url.trim().is_empty() {
            return Err(PanelError::config_error(
                "api.base_url must not be empty",
                Some("api.base_url"),
                Some("Set the backend base URL, e.g. http://localhost:8000"),
            ));
        }

        if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
            return Err(PanelError::config_error(
                "api.base_url must start with http:// or https://",
                Some("api.base_url"),
                None,
            ));
        }

        if config.api.timeout_secs == 0 {
            return Err(PanelError::config_error(
                "api.timeout_secs must be greater than zero",
                Some("api.timeout_secs"),
                None,
            ));
        }

        Ok(())
    }
}
