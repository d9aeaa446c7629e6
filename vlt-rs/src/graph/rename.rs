//! Link propagation after a note is renamed.
//!
//! Propagation is not transactional. Documents are rewritten one at a time
//! in enumeration order; a failed write stops the run and earlier rewrites
//! stay on disk.

use crate::error::{Result, VaultError};
use crate::parser;
use crate::types::TextEdit;
use crate::vault::Vault;
use crate::walk::Document;
use serde::Serialize;
use std::path::PathBuf;

/// A document a rename would rewrite, with the individual link changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedUpdate {
    pub path: PathBuf,
    pub changes: Vec<TextEdit>,
}

/// Strict read: a document that is not valid UTF-8 is never rewritten.
fn read_for_rewrite(vault: &Vault, doc: &Document) -> Option<String> {
    match doc.read(&vault.root) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!(path = %doc.path.display(), error = %e, "not rewriting note");
            None
        }
    }
}

/// Retarget every link to `old_title` across the vault to `new_title`.
///
/// Returns the number of documents rewritten; each is written at most once.
/// Documents that cannot be read as UTF-8 are skipped. A failed write halts
/// with [`VaultError::PropagationHalted`].
pub fn propagate(vault: &Vault, old_title: &str, new_title: &str) -> Result<usize> {
    if old_title == new_title {
        return Ok(0);
    }
    let mut updated = 0;

    for doc in vault.documents()? {
        let Some(content) = read_for_rewrite(vault, &doc) else {
            continue;
        };

        let edits = parser::title_edits(&content, old_title, new_title);
        if edits.is_empty() {
            continue;
        }
        let rewritten = parser::apply_edits(&content, &edits);
        if rewritten == content {
            continue;
        }

        if let Err(source) = std::fs::write(vault.note_path(&doc.path), rewritten) {
            tracing::warn!(
                path = %doc.path.display(),
                updated,
                error = %source,
                "link update halted"
            );
            return Err(VaultError::PropagationHalted {
                updated,
                path: doc.path,
                source,
            });
        }

        tracing::debug!(path = %doc.path.display(), links = edits.len(), "rewrote links");
        updated += 1;
    }

    Ok(updated)
}

/// The documents [`propagate`] would rewrite, without writing anything.
pub fn plan_rename(
    vault: &Vault,
    old_title: &str,
    new_title: &str,
) -> Result<Vec<PlannedUpdate>> {
    if old_title == new_title {
        return Ok(Vec::new());
    }

    let mut plan = Vec::new();
    for doc in vault.documents()? {
        let Some(content) = read_for_rewrite(vault, &doc) else {
            continue;
        };
        let changes = parser::title_edits(&content, old_title, new_title);
        if !changes.is_empty() {
            plan.push(PlannedUpdate {
                path: doc.path,
                changes,
            });
        }
    }
    Ok(plan)
}
