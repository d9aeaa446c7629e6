//! Vault-wide link health: orphans and unresolved links.

use crate::cli::output::Output;
use crate::error::Result;
use crate::graph;
use crate::types::UnresolvedLink;
use crate::vault::Vault;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct OrphansResponse {
    pub orphans: Vec<PathBuf>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct UnresolvedResponse {
    pub unresolved: Vec<UnresolvedLink>,
    pub total: usize,
}

pub fn orphans(vault: &Vault, output: &Output) -> Result<()> {
    let orphans = graph::orphans(vault)?;
    output.print(&OrphansResponse {
        total: orphans.len(),
        orphans,
    })
}

pub fn unresolved(vault: &Vault, output: &Output) -> Result<()> {
    let unresolved = graph::unresolved(vault)?;
    output.print(&UnresolvedResponse {
        total: unresolved.len(),
        unresolved,
    })
}
