//! Resolve and read command implementations.

use crate::cli::args::TitleArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::types::MatchType;
use crate::vault::Vault;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub query: String,
    pub resolved: PathBuf,
    pub match_type: MatchType,
}

pub fn run(vault: &Vault, args: &TitleArgs, output: &Output) -> Result<()> {
    let resolution = vault.resolve_note(&args.title)?;
    output.print(&ResolveResponse {
        query: args.title.clone(),
        resolved: resolution.path,
        match_type: resolution.match_type,
    })
}

/// Print the raw bytes of the note a title resolves to.
pub fn read(vault: &Vault, args: &TitleArgs, output: &Output) -> Result<()> {
    let note = vault.load_by_title(&args.title)?;
    output.print_raw(&note.content);
    Ok(())
}
