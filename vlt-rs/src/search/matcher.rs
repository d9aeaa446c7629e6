//! Query evaluation against notes.

use crate::error::Result;
use crate::note::Note;
use crate::parser::get_value;
use crate::search::types::*;
use crate::vault::Vault;
use std::path::Path;

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn filters_hold(note: &Note, filters: &[PropertyFilter]) -> bool {
    if filters.is_empty() {
        return true;
    }
    let fm = note.frontmatter();
    if !fm.found {
        return false;
    }
    filters.iter().all(|f| {
        get_value(fm.yaml, &f.key).is_some_and(|v| v.to_lowercase() == f.value.to_lowercase())
    })
}

/// Evaluate a query against a note, returning what matched.
///
/// Filters must all hold. The text is tried against the title first, then
/// the whole raw content.
pub fn evaluate_note(note: &Note, query: &SearchQuery) -> Option<MatchField> {
    if !filters_hold(note, &query.filters) {
        return None;
    }
    if query.text.is_empty() {
        return Some(MatchField::Properties);
    }

    let needle = query.text.to_lowercase();
    if contains_ci(note.title(), &needle) {
        Some(MatchField::Title)
    } else if contains_ci(&note.content, &needle) {
        Some(MatchField::Content)
    } else {
        None
    }
}

/// Search the vault, or one folder of it. Results are sorted by path.
///
/// A title match without filters is reported without reading the note.
pub fn search(
    vault: &Vault,
    query: &SearchQuery,
    folder: Option<&Path>,
) -> Result<Vec<SearchResult>> {
    let needle = query.text.to_lowercase();
    let mut results = Vec::new();

    for doc in vault.documents_in(folder, crate::walk::MARKDOWN_EXT)? {
        if query.filters.is_empty() && !needle.is_empty() && contains_ci(&doc.title, &needle) {
            results.push(SearchResult {
                title: doc.title,
                path: doc.path,
                matched: MatchField::Title,
            });
            continue;
        }

        let content = match doc.read_lossy(&vault.root) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %doc.path.display(), error = %e, "skipping unreadable note");
                continue;
            }
        };
        let note = Note::new(doc.path, content);
        if let Some(matched) = evaluate_note(&note, query) {
            results.push(SearchResult {
                title: note.title().to_string(),
                path: note.path,
                matched,
            });
        }
    }

    results.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(results)
}
