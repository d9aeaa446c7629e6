//! Vaults command implementation.

use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct VaultEntry {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct VaultsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub vaults: Vec<VaultEntry>,
}

pub fn run(config: &Config, output: &Output) -> Result<()> {
    let vaults = config
        .discover_vaults()
        .into_iter()
        .map(|(name, path)| VaultEntry { name, path })
        .collect();

    output.print(&VaultsResponse {
        default: config.default_vault.clone(),
        vaults,
    })
}
