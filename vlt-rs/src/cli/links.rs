//! Backlinks and outgoing links commands.

use crate::cli::args::TitleArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::graph;
use crate::types::OutgoingLink;
use crate::vault::Vault;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct BacklinksResponse {
    pub title: String,
    pub backlinks: Vec<PathBuf>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub note: PathBuf,
    pub links: Vec<OutgoingLink>,
    pub broken: usize,
}

/// Notes linking to a title. The title need not name an existing note.
pub fn backlinks(vault: &Vault, args: &TitleArgs, output: &Output) -> Result<()> {
    let backlinks = graph::backlinks(vault, &args.title)?;
    output.print(&BacklinksResponse {
        title: args.title.clone(),
        total: backlinks.len(),
        backlinks,
    })
}

/// Outgoing links of the note a title resolves to.
pub fn links(vault: &Vault, args: &TitleArgs, output: &Output) -> Result<()> {
    let resolution = vault.resolve_note(&args.title)?;
    let links = graph::outgoing_links(vault, &resolution.path)?;
    output.print(&LinksResponse {
        note: resolution.path,
        broken: links.iter().filter(|l| l.broken).count(),
        links,
    })
}
