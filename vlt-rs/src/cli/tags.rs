//! Tag commands.

use crate::cli::args::{TagArgs, TagSort, TagsArgs};
use crate::cli::output::Output;
use crate::error::Result;
use crate::tags;
use crate::vault::Vault;
use serde::Serialize;
use std::cmp::Reverse;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<TagEntry>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct TagEntry {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub tag: String,
    pub notes: Vec<PathBuf>,
    pub total: usize,
}

pub fn list(vault: &Vault, args: &TagsArgs, output: &Output) -> Result<()> {
    let mut counts = tags::tag_counts(vault)?;
    if args.sort == TagSort::Count {
        // Stable, so equal counts stay alphabetical.
        counts.sort_by_key(|c| Reverse(c.count));
    }

    let entries: Vec<TagEntry> = counts
        .into_iter()
        .map(|c| TagEntry {
            tag: c.tag,
            count: args.counts.then_some(c.count),
        })
        .collect();

    output.print(&TagsResponse {
        total: entries.len(),
        tags: entries,
    })
}

pub fn find(vault: &Vault, args: &TagArgs, output: &Output) -> Result<()> {
    let notes = tags::notes_with_tag(vault, &args.tag)?;
    output.print(&TagResponse {
        tag: crate::parser::normalize_tag(&args.tag),
        total: notes.len(),
        notes,
    })
}
