//! Snapshot of every note's title and aliases.
//!
//! Built in one walk, then queried without further I/O. Vault-wide queries
//! build it first and scan link sources second.

use super::resolution::rank;
use crate::error::Result;
use crate::parser;
use crate::types::{MatchType, Resolution, TitleKey};
use crate::vault::Vault;
use std::collections::HashMap;
use std::path::PathBuf;

/// One note as seen by the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedNote {
    pub path: PathBuf,
    pub title: String,
    pub aliases: Vec<String>,
}

impl IndexedNote {
    /// Folded keys of the title and every alias.
    pub fn keys(&self) -> impl Iterator<Item = TitleKey> + '_ {
        std::iter::once(TitleKey::new(&self.title))
            .chain(self.aliases.iter().map(|a| TitleKey::new(a)))
    }
}

/// Title and alias lookup tables over a vault snapshot.
#[derive(Debug, Default)]
pub struct NoteIndex {
    notes: Vec<IndexedNote>,
    /// Exact title → note indices, best-ranked first.
    by_title: HashMap<String, Vec<usize>>,
    /// Folded title → note indices.
    by_title_key: HashMap<TitleKey, Vec<usize>>,
    /// Folded alias → note indices, best-ranked first.
    by_alias: HashMap<TitleKey, Vec<usize>>,
}

impl NoteIndex {
    /// Walk the vault and record every note's title and aliases.
    ///
    /// A note that cannot be read is still indexed by its title.
    pub fn build(vault: &Vault) -> Result<Self> {
        let mut notes = Vec::new();
        for doc in vault.documents()? {
            let aliases = match doc.read_lossy(&vault.root) {
                Ok(content) => parser::aliases(&content),
                Err(e) => {
                    tracing::debug!(
                        path = %doc.path.display(),
                        error = %e,
                        "indexing note without aliases"
                    );
                    Vec::new()
                }
            };
            notes.push(IndexedNote {
                path: doc.path,
                title: doc.title,
                aliases,
            });
        }
        Ok(Self::from_notes(notes))
    }

    /// Build the lookup tables from already-collected notes.
    pub fn from_notes(notes: Vec<IndexedNote>) -> Self {
        let mut order: Vec<usize> = (0..notes.len()).collect();
        order.sort_by(|&a, &b| rank(&notes[a].path).cmp(&rank(&notes[b].path)));

        let mut index = Self::default();
        for i in order {
            let note = &notes[i];
            index.by_title.entry(note.title.clone()).or_default().push(i);
            index
                .by_title_key
                .entry(TitleKey::new(&note.title))
                .or_default()
                .push(i);
            for alias in &note.aliases {
                let slot = index.by_alias.entry(TitleKey::new(alias)).or_default();
                if !slot.contains(&i) {
                    slot.push(i);
                }
            }
        }
        index.notes = notes;
        index
    }

    /// All indexed notes, in enumeration order.
    pub fn notes(&self) -> &[IndexedNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Resolve a title the same way [`super::resolve_note`] does.
    pub fn resolve(&self, title: &str) -> Option<Resolution> {
        if let Some(&i) = self.by_title.get(title).and_then(|v| v.first()) {
            return Some(Resolution {
                path: self.notes[i].path.clone(),
                match_type: MatchType::Name,
            });
        }
        let &i = self.by_alias.get(&TitleKey::new(title))?.first()?;
        Some(Resolution {
            path: self.notes[i].path.clone(),
            match_type: MatchType::Alias,
        })
    }

    /// Whether any note's title or alias folds to `key`.
    pub fn contains_key(&self, key: &TitleKey) -> bool {
        self.by_title_key.contains_key(key) || self.by_alias.contains_key(key)
    }
}
