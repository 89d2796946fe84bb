use std::fs;
use std::path::PathBuf;
use crate::config::constants::{CONFIG_DIR_NAME, LAST_QUERY_FILE_NAME};
use crate::errors::{PanelError, PanelResult};

/// Persists the last submitted search query as a plain JSON string in the
/// config directory, so `search` without arguments can re-run it.
pub struct LastQueryStore;

impl LastQueryStore {
    fn file_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(LAST_QUERY_FILE_NAME))
    }

    pub fn save(query: &str) -> PanelResult<()> {
        let Some(path) = Self::file_path() else {
            log::warn!("No home directory found, last query not saved");
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string(query)?;
        fs::write(&path, payload)?;
        log::debug!("Saved last query to {}", path.display());
        Ok(())
    }

    pub fn load() -> PanelResult<Option<String>> {
        let Some(path) = Self::file_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let query: String = serde_json::from_str(&content)
            .map_err(|e| PanelError::parse_error("last query file", &e.to_string()))?;
        Ok(Some(query))
    }
}
