//! Note resolution.
//!
//! A title resolves in this order:
//! 1. Filename match (case-sensitive, extension stripped)
//! 2. Alias match from frontmatter (case-insensitive)
//!
//! When several documents match at the same step, the one with the fewest
//! path components wins, then the lexicographically smallest path.

use crate::error::{Result, VaultError};
use crate::parser;
use crate::types::{MatchType, Resolution, TitleKey};
use crate::vault::Vault;
use crate::walk::Document;
use std::path::Path;

/// Ranking key for resolution candidates. Lower wins.
pub fn rank(path: &Path) -> (usize, &Path) {
    (path.components().count(), path)
}

/// Resolve a title to a document.
///
/// Filenames are checked first without reading any file. Frontmatter is only
/// read when no filename matches. Documents that cannot be read are skipped.
pub fn resolve_note(vault: &Vault, title: &str) -> Result<Resolution> {
    let mut docs: Vec<Document> = vault.documents()?.collect();

    let by_name = docs
        .iter()
        .filter(|d| d.title == title)
        .min_by(|a, b| rank(&a.path).cmp(&rank(&b.path)));
    if let Some(doc) = by_name {
        return Ok(Resolution {
            path: doc.path.clone(),
            match_type: MatchType::Name,
        });
    }

    // Best-ranked first, so the first alias hit is the winner.
    docs.sort_by(|a, b| rank(&a.path).cmp(&rank(&b.path)));
    let key = TitleKey::new(title);
    for doc in &docs {
        let content = match doc.read_lossy(&vault.root) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %doc.path.display(), error = %e, "skipping unreadable note");
                continue;
            }
        };
        if parser::aliases(&content)
            .iter()
            .any(|alias| TitleKey::new(alias) == key)
        {
            return Ok(Resolution {
                path: doc.path.clone(),
                match_type: MatchType::Alias,
            });
        }
    }

    Err(VaultError::NoteNotFound(title.to_string()))
}
