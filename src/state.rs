//! Application state management
//! This module defines the state shared by everything that needs the identity registry.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::config::AppConfig;
use crate::core::IdentityRegistry;

/// Global application state
pub struct AppState {
    /// The configuration the registry was built from
    pub config: AppConfig,
    /// The validated identity registry, shared read-only
    pub registry: Arc<IdentityRegistry>,
}

impl AppState {
    /// Loads the config at `config_path` and builds the registry from it
    pub async fn new(config_path: &Path) -> Result<Self> {
        let config = AppConfig::load_config(config_path).await?;
        Self::from_config(config)
    }

    /// Builds the registry from an already loaded config. Any invalid identifier fails the whole state.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        info!("Initializing identity registry...");
        let registry = IdentityRegistry::from_literals(&config.registry.literals())?;
        Ok(Self {
            config,
            registry: Arc::new(registry),
        })
    }

    /// Gets a shared handle to the identity registry
    pub fn get_registry_arc(&self) -> Arc<IdentityRegistry> {
        self.registry.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RegistryError;

    #[test]
    fn test_default_config_does_not_start() {
        let err = AppState::from_config(AppConfig::default()).err().unwrap();
        let registry_err = err.downcast_ref::<RegistryError>().unwrap();
        assert_eq!(registry_err.failures.len(), 1);
    }

    #[test]
    fn test_complete_config_starts() {
        let mut config = AppConfig::default();
        config.registry.revert_uuid = "5d3a7f10-2c4b-4e8a-9f61-0b7c2d9e4a13".to_string();
        let state = AppState::from_config(config).unwrap();
        assert_eq!(state.get_registry_arc().memory_spi_op_code().value(), 0x13);
    }
}
