pub mod registry_config;

use std::path::Path;

use anyhow::Result;
use log::{error, info, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::config::registry_config::RegistryConfig;
use crate::utils::ensure_directory_exists;

pub const CONFIG_FILE_NAME: &str = "extractor_config.json";

/// Logger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Emit one JSON object per line instead of plain text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Parsed level, falling back to `Info` on an unknown name
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads the config from a configuration file.
    /// Only a missing file falls back to the default; any other IO error is returned.
    pub async fn load_config(file_path: &Path) -> Result<Self> {
        let file_path_str = file_path.to_string_lossy().into_owned();

        if !fs::try_exists(file_path).await? {
            warn!("Config file not found at {:?}, using default.", file_path_str);
            return Ok(Self::default());
        }

        let config_json = fs::read_to_string(file_path).await?;
        let config: Self = serde_json::from_str(&config_json)?;

        info!("Config loaded from {:?}", file_path_str);
        Ok(config)
    }

    /// Saves the current config to a configuration file.
    pub async fn save_config(&self, file_path: &Path) -> Result<()> {
        if let Some(config_dir) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory_exists(config_dir).await?;
        }
        let file_path_str = file_path.to_string_lossy().into_owned();

        let config_json = match serde_json::to_string_pretty(&self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize config to JSON: {}", e);
                return Err(e.into());
            }
        };

        fs::write(file_path, config_json).await?;
        info!("Config saved to {:?}", file_path_str);
        Ok(())
    }
}
