//! Vault-wide tag queries.

use crate::error::{Result, VaultError};
use crate::parser;
use crate::vault::Vault;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A tag and the number of notes carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Every tag in the vault with its note count, sorted by tag.
///
/// A note counts once per tag however often it repeats it. Unreadable
/// notes are skipped.
pub fn tag_counts(vault: &Vault) -> Result<Vec<TagCount>> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for doc in vault.documents()? {
        let content = match doc.read_lossy(&vault.root) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %doc.path.display(), error = %e, "skipping unreadable note");
                continue;
            }
        };
        for tag in parser::note_tags(&content) {
            *counts.entry(tag).or_default() += 1;
        }
    }

    Ok(counts
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect())
}

/// Notes tagged with `tag` or any of its subtags, sorted by path.
///
/// The query may carry a leading `#` and is compared case-insensitively.
pub fn notes_with_tag(vault: &Vault, tag: &str) -> Result<Vec<PathBuf>> {
    let query = parser::normalize_tag(tag);
    if query.is_empty() {
        return Err(VaultError::InvalidTag(tag.to_string()));
    }

    let mut notes = Vec::new();
    for doc in vault.documents()? {
        let Ok(content) = doc.read_lossy(&vault.root) else {
            continue;
        };
        if parser::note_tags(&content)
            .iter()
            .any(|t| parser::tag_matches(t, &query))
        {
            notes.push(doc.path);
        }
    }

    notes.sort();
    Ok(notes)
}
