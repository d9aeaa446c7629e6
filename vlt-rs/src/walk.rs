//! Document enumeration over a vault tree.
//!
//! Every vault-wide operation walks the tree through [`Documents`], so the
//! set of files considered part of the vault is decided in exactly one place:
//! [`is_excluded_dir`].

use crate::error::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Name of the vault's trash folder.
pub const TRASH_DIR: &str = ".trash";

/// Extension of markdown documents.
pub const MARKDOWN_EXT: &str = "md";

/// Whether a directory with this name is pruned from every walk.
///
/// Dotted directories (`.obsidian`, `.git`, ...) and the trash are never part
/// of the vault.
pub fn is_excluded_dir(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || name == TRASH_DIR
}

/// Whether any component of a relative path names an excluded directory.
pub fn has_excluded_component(relative: &Path) -> bool {
    relative
        .components()
        .any(|c| is_excluded_dir(c.as_os_str()))
}

/// A document found during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the vault root.
    pub path: PathBuf,

    /// Filename without its extension.
    pub title: String,
}

impl Document {
    /// Read the content of this document. Fails on invalid UTF-8.
    pub fn read(&self, vault_root: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(vault_root.join(&self.path))
    }

    /// Read the content of this document, replacing invalid UTF-8 sequences.
    ///
    /// For scans only; text read this way must never be written back.
    pub fn read_lossy(&self, vault_root: &Path) -> std::io::Result<String> {
        read_lossy(&vault_root.join(&self.path))
    }

    /// Number of path components, used for resolution ranking.
    pub fn depth(&self) -> usize {
        self.path.components().count()
    }
}

/// Lazy depth-first sequence of documents under a root.
///
/// Entries are visited sorted by file name. Unreadable entries are skipped.
pub struct Documents {
    vault_root: PathBuf,
    extension: String,
    inner: walkdir::FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>,
}

impl Documents {
    /// Start a walk at `walk_root`, reporting paths relative to `vault_root`.
    ///
    /// Fails if `walk_root` itself cannot be read.
    pub fn new(vault_root: &Path, walk_root: &Path, extension: &str) -> Result<Self> {
        // Surface root failures to the caller before any entry is produced.
        std::fs::read_dir(walk_root)?;

        let inner = WalkDir::new(walk_root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(keep_entry as fn(&DirEntry) -> bool);

        Ok(Self {
            vault_root: vault_root.to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
            inner,
        })
    }

    fn to_document(&self, entry: &DirEntry) -> Option<Document> {
        if !entry.file_type().is_file() {
            return None;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
            return None;
        }
        let relative = path.strip_prefix(&self.vault_root).ok()?.to_path_buf();
        let title = path.file_stem()?.to_string_lossy().into_owned();
        Some(Document {
            path: relative,
            title,
        })
    }
}

impl Iterator for Documents {
    type Item = Document;

    fn next(&mut self) -> Option<Document> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if let Some(doc) = self.to_document(&entry) {
                        return Some(doc);
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable vault entry");
                }
            }
        }
    }
}

/// Read a file as text, replacing invalid UTF-8 sequences.
pub fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// The walk root (depth 0) is always entered; below it, excluded directories are pruned.
fn keep_entry(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !(entry.file_type().is_dir() && is_excluded_dir(entry.file_name()))
}
