//! Move command with link propagation.

use crate::cli::args::MoveArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::Vault;
use serde::Serialize;
use std::path::PathBuf;

/// Output for move command.
#[derive(Debug, Serialize)]
pub struct MoveOutput {
    pub from: PathBuf,
    pub to: PathBuf,
    pub title_changed: bool,
    pub links_updated: usize,
    pub message: String,
}

/// Output for dry-run mode.
#[derive(Debug, Serialize)]
pub struct MoveDryRunOutput {
    pub action: String,
    pub from: PathBuf,
    pub to: PathBuf,
    pub would_update: Vec<WouldUpdate>,
}

/// A file that would be updated.
#[derive(Debug, Serialize)]
pub struct WouldUpdate {
    pub path: PathBuf,
    pub links: Vec<LinkChange>,
}

/// A link that would be changed.
#[derive(Debug, Serialize)]
pub struct LinkChange {
    pub line: usize,
    pub old: String,
    pub new: String,
}

/// Execute move command.
pub fn run(vault: &Vault, args: &MoveArgs, output: &Output) -> Result<()> {
    let from = vault.normalize_note_path(&args.from);
    let to = vault.normalize_note_path(&args.to);

    if args.dry_run {
        let would_update = vault
            .plan_move(&from, &to)?
            .into_iter()
            .map(|update| WouldUpdate {
                path: update.path,
                links: update
                    .changes
                    .into_iter()
                    .map(|c| LinkChange {
                        line: c.line,
                        old: c.old,
                        new: c.new,
                    })
                    .collect(),
            })
            .collect();

        return output.print(&MoveDryRunOutput {
            action: "move".to_string(),
            from,
            to,
            would_update,
        });
    }

    let report = vault.move_note(&from, &to)?;
    let message = if report.links_updated > 0 {
        format!(
            "Moved {} -> {}, updated links in {} file(s)",
            report.from.display(),
            report.to.display(),
            report.links_updated
        )
    } else {
        format!("Moved {} -> {}", report.from.display(), report.to.display())
    };

    output.print(&MoveOutput {
        from: report.from,
        to: report.to,
        title_changed: report.title_changed,
        links_updated: report.links_updated,
        message,
    })
}
