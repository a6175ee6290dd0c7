//! CLI commands
//! This module defines the operations the command line front end can run.

use std::path::Path;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::config::AppConfig;
use crate::core::bluetooth::{IdentifierRole, IdentityRegistry};
use crate::state::AppState;

/// Renders the validated registry as pretty JSON
pub fn show_identity(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state.registry.as_ref())?)
}

/// One failing registry entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckFailure {
    pub role: IdentifierRole,
    pub reason: String,
}

/// Validates the registry literals in `config` without building any state
///
/// # Returns
/// Every failing entry. An empty list means the registry would start.
pub fn check_config(config: &AppConfig) -> Vec<CheckFailure> {
    match IdentityRegistry::from_literals(&config.registry.literals()) {
        Ok(_) => Vec::new(),
        Err(e) => e
            .failures
            .into_iter()
            .map(|(role, err)| CheckFailure {
                role,
                reason: err.to_string(),
            })
            .collect(),
    }
}

/// Writes the default configuration to `path`
pub async fn init_config(path: &Path) -> Result<()> {
    AppConfig::default().save_config(path).await?;
    info!("Default configuration written; set registry.revert_uuid before use.");
    Ok(())
}
