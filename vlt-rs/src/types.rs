//! Shared types for vlt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use unicode_normalization::UnicodeNormalization;

/// A wikilink or embed found in a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiLink {
    /// The target title, trimmed of surrounding whitespace.
    pub title: String,

    /// Heading after `#`, verbatim. Empty when absent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub heading: String,

    /// Display text after `|`, verbatim. Empty when absent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display: String,

    /// Whether this is an embed (`![[...]]`) rather than a link.
    pub embed: bool,

    /// The exact matched text, including brackets and the embed marker.
    pub raw: String,

    /// Line number where this link appears (1-indexed).
    pub line: usize,

    /// Byte offset of the match start in the source text.
    #[serde(skip)]
    pub start: usize,

    /// Byte offset one past the match end in the source text.
    #[serde(skip)]
    pub end: usize,
}

impl WikiLink {
    /// Case-folded key of the target title.
    pub fn key(&self) -> TitleKey {
        TitleKey::new(&self.title)
    }
}

/// A pending in-place replacement of one link in a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Line number of the replaced link (1-indexed).
    pub line: usize,

    /// Byte range of the replaced text.
    #[serde(skip)]
    pub start: usize,
    #[serde(skip)]
    pub end: usize,

    pub old: String,
    pub new: String,
}

/// A case-folded title or alias used for case-insensitive set membership.
///
/// Folding is NFC normalisation followed by Unicode lowercasing, so composed
/// and decomposed spellings of the same title compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TitleKey(String);

impl TitleKey {
    pub fn new(title: &str) -> Self {
        Self(title.nfc().collect::<String>().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TitleKey {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl fmt::Display for TitleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a query matched the note it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Filename (title) match, case-sensitive.
    Name,
    /// Frontmatter alias match, case-insensitive.
    Alias,
}

/// A resolved note path together with how it was matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub path: PathBuf,
    pub match_type: MatchType,
}

/// One unique outgoing link target of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingLink {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_path: Option<PathBuf>,
    pub broken: bool,
}

/// A link target that matches no title or alias anywhere in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedLink {
    /// The target as written in the first source where it appeared.
    pub target: String,
    /// The first document (relative path) that referenced it.
    pub source: PathBuf,
}
