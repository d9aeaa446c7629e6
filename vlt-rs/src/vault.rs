//! Vault representation and operations.

use crate::error::{Result, VaultError};
use crate::graph::{self, PlannedUpdate};
use crate::note::Note;
use crate::types::Resolution;
use crate::walk::{self, Documents, MARKDOWN_EXT, TRASH_DIR};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Represents an Obsidian vault.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Absolute root path of the vault.
    pub root: PathBuf,
}

/// Outcome of a successful move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub from: PathBuf,
    pub to: PathBuf,

    /// Whether the filename title changed, which retargets links.
    pub title_changed: bool,

    /// Number of documents rewritten to follow the move.
    pub links_updated: usize,
}

/// Filters for [`Vault::list_files`].
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Restrict the walk to this vault-relative folder.
    pub folder: Option<PathBuf>,

    /// File extension, without the dot. Defaults to `md`.
    pub extension: Option<String>,

    /// Glob matched against the vault-relative path.
    pub glob: Option<String>,
}

impl Vault {
    /// Open a vault rooted at an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.exists() {
            return Err(VaultError::VaultNotFound(root));
        }
        if !root.is_dir() {
            return Err(VaultError::InvalidVaultPath(root));
        }

        let root = std::fs::canonicalize(&root)?;
        Ok(Self { root })
    }

    /// The vault's directory name.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// All markdown documents in the vault.
    pub fn documents(&self) -> Result<Documents> {
        self.documents_with_extension(MARKDOWN_EXT)
    }

    /// All documents with the given extension.
    pub fn documents_with_extension(&self, extension: &str) -> Result<Documents> {
        Documents::new(&self.root, &self.root, extension)
    }

    /// Documents with the given extension under an optional vault-relative folder.
    ///
    /// A folder inside an excluded directory is rejected, as is one that does not exist.
    pub fn documents_in(&self, folder: Option<&Path>, extension: &str) -> Result<Documents> {
        let Some(folder) = folder.filter(|f| !f.as_os_str().is_empty()) else {
            return self.documents_with_extension(extension);
        };

        if walk::has_excluded_component(folder) {
            return Err(VaultError::InvalidVaultPath(folder.to_path_buf()));
        }
        let walk_root = self.root.join(folder);
        if !walk_root.is_dir() {
            return Err(VaultError::InvalidVaultPath(folder.to_path_buf()));
        }

        Documents::new(&self.root, &walk_root, extension)
    }

    /// Get the full path to a note.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Normalize a note path (add .md extension if needed).
    pub fn normalize_note_path(&self, path: &str) -> PathBuf {
        let path = path.trim().trim_start_matches("./");
        if path.ends_with(".md") {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.md", path))
        }
    }

    /// Check if a note exists.
    pub fn note_exists(&self, relative_path: &Path) -> bool {
        self.note_path(relative_path).is_file()
    }

    /// Load a note from the vault.
    pub fn load_note(&self, relative_path: &Path) -> Result<Note> {
        check_inside(relative_path)?;
        if !self.note_exists(relative_path) {
            return Err(VaultError::NoteNotFound(
                relative_path.to_string_lossy().into_owned(),
            ));
        }
        Note::load(&self.root, relative_path)
    }

    /// Resolve a title to a note by filename, then by alias.
    pub fn resolve_note(&self, title: &str) -> Result<Resolution> {
        graph::resolve_note(self, title)
    }

    /// Resolve a title and load the note it names.
    pub fn load_by_title(&self, title: &str) -> Result<Note> {
        let resolution = self.resolve_note(title)?;
        Note::load(&self.root, &resolution.path)
    }

    /// List files matching a filter, sorted by relative path.
    pub fn list_files(&self, filter: &FileFilter) -> Result<Vec<PathBuf>> {
        let extension = filter.extension.as_deref().unwrap_or(MARKDOWN_EXT);
        let pattern = filter
            .glob
            .as_deref()
            .map(glob::Pattern::new)
            .transpose()?;

        let mut files: Vec<PathBuf> = self
            .documents_in(filter.folder.as_deref(), extension)?
            .map(|doc| doc.path)
            .filter(|path| pattern.as_ref().is_none_or(|p| p.matches_path(path)))
            .collect();

        files.sort();
        Ok(files)
    }

    fn check_move(&self, from: &Path, to: &Path) -> Result<()> {
        check_inside(from)?;
        check_inside(to)?;
        if !self.note_exists(from) {
            return Err(VaultError::NoteNotFound(from.to_string_lossy().into_owned()));
        }
        if walk::has_excluded_component(to) {
            return Err(VaultError::InvalidVaultPath(to.to_path_buf()));
        }
        if self.note_path(to).exists() {
            return Err(VaultError::NoteAlreadyExists(to.to_path_buf()));
        }
        Ok(())
    }

    /// Move a note, retargeting links to it when its title changes.
    ///
    /// A move between folders that keeps the filename rewrites nothing. A
    /// failed rewrite leaves the move and earlier rewrites in place and
    /// reports [`VaultError::PropagationHalted`].
    pub fn move_note(&self, from: &Path, to: &Path) -> Result<MoveReport> {
        self.check_move(from, to)?;

        let to_full = self.note_path(to);
        if let Some(parent) = to_full.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::rename(self.note_path(from), &to_full)?;
        tracing::info!(from = %from.display(), to = %to.display(), "moved note");

        let (old_title, new_title) = (title_of(from), title_of(to));
        let title_changed = old_title != new_title;
        let links_updated = if title_changed {
            graph::propagate(self, &old_title, &new_title)?
        } else {
            0
        };

        Ok(MoveReport {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            title_changed,
            links_updated,
        })
    }

    /// The documents a move would rewrite, without touching the filesystem.
    pub fn plan_move(&self, from: &Path, to: &Path) -> Result<Vec<PlannedUpdate>> {
        self.check_move(from, to)?;
        graph::plan_rename(self, &title_of(from), &title_of(to))
    }

    /// Move a note into the vault's trash folder, returning its new relative path.
    ///
    /// The trashed file keeps its file name; a numeric suffix avoids clobbering
    /// an earlier trashed file of the same name.
    pub fn trash_note(&self, relative_path: &Path) -> Result<PathBuf> {
        check_inside(relative_path)?;
        if !self.note_exists(relative_path) {
            return Err(VaultError::NoteNotFound(
                relative_path.to_string_lossy().into_owned(),
            ));
        }

        let trash = self.root.join(TRASH_DIR);
        std::fs::create_dir_all(&trash)?;

        let stem = relative_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = relative_path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let mut name = format!("{}{}", stem, ext);
        let mut n = 1;
        while trash.join(&name).exists() {
            name = format!("{} {}{}", stem, n, ext);
            n += 1;
        }

        std::fs::rename(self.note_path(relative_path), trash.join(&name))?;
        tracing::info!(path = %relative_path.display(), "moved note to trash");
        Ok(Path::new(TRASH_DIR).join(name))
    }

    /// Permanently delete a note.
    pub fn delete_note(&self, relative_path: &Path) -> Result<()> {
        check_inside(relative_path)?;
        if !self.note_exists(relative_path) {
            return Err(VaultError::NoteNotFound(
                relative_path.to_string_lossy().into_owned(),
            ));
        }

        std::fs::remove_file(self.note_path(relative_path))?;
        tracing::info!(path = %relative_path.display(), "deleted note");
        Ok(())
    }
}

/// Filename title of a note path.
fn title_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reject a note path that would resolve outside the vault root.
fn check_inside(relative_path: &Path) -> Result<()> {
    let escapes = relative_path.components().any(|c| {
        matches!(c, Component::RootDir | Component::Prefix(_) | Component::ParentDir)
    });
    if escapes {
        return Err(VaultError::InvalidVaultPath(relative_path.to_path_buf()));
    }
    Ok(())
}
