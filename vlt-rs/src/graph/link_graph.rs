//! Link graph queries.
//!
//! Nothing is cached between calls: each query walks the vault afresh.
//! Documents that cannot be read are skipped; invalid UTF-8 is replaced,
//! not skipped.

use super::index::NoteIndex;
use crate::error::Result;
use crate::parser;
use crate::types::{OutgoingLink, TitleKey, UnresolvedLink};
use crate::vault::Vault;
use crate::walk::Document;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn read_or_skip(vault: &Vault, doc: &Document) -> Option<String> {
    match doc.read_lossy(&vault.root) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!(path = %doc.path.display(), error = %e, "skipping unreadable note");
            None
        }
    }
}

/// Documents containing a link or embed to `title`, compared case-insensitively.
///
/// A document linking to itself is included. Paths are sorted.
pub fn backlinks(vault: &Vault, title: &str) -> Result<Vec<PathBuf>> {
    let key = TitleKey::new(title.trim());
    let mut sources: Vec<PathBuf> = vault
        .documents()?
        .filter(|doc| {
            read_or_skip(vault, doc).is_some_and(|content| parser::links_to(&content, &key))
        })
        .map(|doc| doc.path)
        .collect();
    sources.sort();
    Ok(sources)
}

/// Unique link targets of one document, each resolved or marked broken.
///
/// Targets are deduplicated by exact title, keeping first-appearance order.
pub fn outgoing_links(vault: &Vault, path: &Path) -> Result<Vec<OutgoingLink>> {
    let note = vault.load_note(path)?;
    let links = note.links();
    if links.is_empty() {
        return Ok(Vec::new());
    }

    let index = NoteIndex::build(vault)?;
    let mut seen = HashSet::new();
    let mut outgoing = Vec::new();

    for link in links {
        if !seen.insert(link.title.clone()) {
            continue;
        }
        let resolved_path = index.resolve(&link.title).map(|r| r.path);
        outgoing.push(OutgoingLink {
            broken: resolved_path.is_none(),
            target: link.title,
            resolved_path,
        });
    }

    Ok(outgoing)
}

/// Notes whose title and aliases are referenced by no link anywhere, sorted by path.
pub fn orphans(vault: &Vault) -> Result<Vec<PathBuf>> {
    let index = NoteIndex::build(vault)?;

    let mut referenced: HashSet<TitleKey> = HashSet::new();
    for doc in vault.documents()? {
        if let Some(content) = read_or_skip(vault, &doc) {
            referenced.extend(parser::parse(&content).iter().map(|l| l.key()));
        }
    }

    let mut orphans: Vec<PathBuf> = index
        .notes()
        .iter()
        .filter(|note| !note.keys().any(|k| referenced.contains(&k)))
        .map(|note| note.path.clone())
        .collect();
    orphans.sort();
    Ok(orphans)
}

/// Link targets matching no title or alias in the vault.
///
/// Each distinct target (case-insensitively) is reported once, with the
/// casing and source of its first occurrence in enumeration order.
pub fn unresolved(vault: &Vault) -> Result<Vec<UnresolvedLink>> {
    let index = NoteIndex::build(vault)?;

    let mut seen: HashSet<TitleKey> = HashSet::new();
    let mut results = Vec::new();

    for doc in vault.documents()? {
        let Some(content) = read_or_skip(vault, &doc) else {
            continue;
        };
        for link in parser::parse(&content) {
            let key = link.key();
            if index.contains_key(&key) || !seen.insert(key) {
                continue;
            }
            results.push(UnresolvedLink {
                target: link.title,
                source: doc.path.clone(),
            });
        }
    }

    Ok(results)
}
