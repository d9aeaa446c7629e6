//! Delete command implementation.

use crate::cli::args::DeleteArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::graph;
use crate::vault::Vault;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trashed_to: Option<PathBuf>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

pub fn run(vault: &Vault, args: &DeleteArgs, output: &Output) -> Result<()> {
    let path = match args.path.as_deref() {
        Some(path) => vault.normalize_note_path(path),
        None => vault.resolve_note(args.title.as_deref().unwrap_or_default())?.path,
    };

    let note = vault.load_note(&path)?;
    let mut linking = BTreeSet::new();
    for name in std::iter::once(note.title().to_string()).chain(note.aliases()) {
        linking.extend(graph::backlinks(vault, &name)?.into_iter().filter(|p| *p != path));
    }
    let warning = (!linking.is_empty()).then(|| {
        format!(
            "{} note(s) link to this note. Links will be broken: {}",
            linking.len(),
            linking
                .iter()
                .take(5)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    });
    if let Some(w) = &warning {
        output.warn(w);
    }

    let response = if args.permanent {
        vault.delete_note(&path)?;
        DeleteResponse {
            message: format!("Deleted {}", path.display()),
            path,
            trashed_to: None,
            warning,
        }
    } else {
        let trashed = vault.trash_note(&path)?;
        DeleteResponse {
            message: format!("Moved {} -> {}", path.display(), trashed.display()),
            path,
            trashed_to: Some(trashed),
            warning,
        }
    };

    output.print(&response)
}
