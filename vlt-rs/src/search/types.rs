//! Query and result types for vault search.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed search query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free text, matched case-insensitively against title then content.
    /// Empty when the query is filters only.
    pub text: String,

    /// Frontmatter equality filters, all of which must hold.
    pub filters: Vec<PropertyFilter>,
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.filters.is_empty()
    }
}

/// A `[key:value]` frontmatter filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub key: String,
    pub value: String,
}

/// Which part of a note satisfied the text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Title,
    Content,
    /// The query had no text; the note matched on filters alone.
    Properties,
}

/// A search result for a single note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    /// Path to the matching note (relative to vault root).
    pub path: PathBuf,
    pub matched: MatchField,
}
