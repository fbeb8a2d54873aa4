use crate::error::PortalError;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::records::RecordKind;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_FILENAME: &str = "config.json";

/// User settings shared by the GUI and CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub items_per_page: usize,
    /// Directory holding `activities.json`, `audit_log.json` and `backups.json`
    pub data_dir: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            data_dir: None,
        }
    }
}

impl PortalConfig {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "confms")
            .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load from the platform config directory, falling back to defaults
    pub fn load() -> Result<Self, PortalError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, PortalError> {
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!(
            "Loaded config from {} (items_per_page={})",
            path.display(),
            config.items_per_page
        );
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, PortalError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PortalError::Config(format!("invalid config file: {}", e)))?;
        if config.items_per_page == 0 {
            return Err(PortalError::InvalidPageSize(config.items_per_page));
        }
        Ok(config)
    }

    pub fn data_file(&self, kind: RecordKind) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(kind.default_file_name()))
    }
}
