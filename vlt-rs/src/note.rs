//! Note representation and operations.

use crate::error::Result;
use crate::parser::{self, Frontmatter};
use crate::types::{TitleKey, WikiLink};
use crate::walk;
use std::path::{Path, PathBuf};

/// A note loaded from the vault.
#[derive(Debug, Clone)]
pub struct Note {
    /// Path relative to vault root (e.g., "proj/My Project.md").
    pub path: PathBuf,

    /// Raw content of the note.
    pub content: String,
}

impl Note {
    /// Create a new note from path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Load a note from disk. Invalid UTF-8 sequences are replaced.
    pub fn load(vault_root: &Path, relative_path: &Path) -> Result<Self> {
        let content = walk::read_lossy(&vault_root.join(relative_path))?;
        Ok(Self {
            path: relative_path.to_path_buf(),
            content,
        })
    }

    /// Save the note to disk.
    pub fn save(&self, vault_root: &Path) -> Result<()> {
        let full_path = vault_root.join(&self.path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&full_path, &self.content)?;
        Ok(())
    }

    /// The note title (filename without extension).
    pub fn title(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    /// The frontmatter block, if any.
    pub fn frontmatter(&self) -> Frontmatter<'_> {
        parser::extract(&self.content)
    }

    /// Aliases declared in frontmatter, case preserved.
    pub fn aliases(&self) -> Vec<String> {
        parser::aliases(&self.content)
    }

    /// Whether `query` names this note by title (case-sensitive) or alias (case-insensitive).
    pub fn answers_to(&self, query: &str) -> bool {
        if self.title() == query {
            return true;
        }
        let key = TitleKey::new(query);
        self.aliases().iter().any(|a| TitleKey::new(a) == key)
    }

    /// All wikilinks and embeds in the note, in order.
    pub fn links(&self) -> Vec<WikiLink> {
        parser::parse(&self.content)
    }
}
