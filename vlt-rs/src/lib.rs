//! vlt - link-graph queries and safe renames for Obsidian-style vaults.
//!
//! # Overview
//!
//! A vault is a directory tree of markdown notes. Each note's title is its
//! filename; frontmatter `aliases` give it alternate names. Notes refer to
//! each other with `[[wikilinks]]` and `![[embeds]]`. This crate provides:
//! - Title and alias resolution with a deterministic tie-break
//! - Backlinks, outgoing links, orphans and unresolved links
//! - Moves and renames that rewrite every link to the note
//! - Title/content search with frontmatter filters
//! - Tag listing and hierarchical tag lookup
//!
//! Nothing is cached: every query reads the vault as it is on disk.
//!
//! # Example
//!
//! ```no_run
//! use vlt::{graph, Vault};
//!
//! let vault = Vault::open("/path/to/vault").unwrap();
//!
//! let note = vault.resolve_note("Session Operating Mode").unwrap();
//! println!("{}", note.path.display());
//!
//! for source in graph::backlinks(&vault, "Session Operating Mode").unwrap() {
//!     println!("linked from {}", source.display());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod note;
pub mod parser;
pub mod search;
pub mod tags;
pub mod types;
pub mod vault;
pub mod walk;

// Re-export main types at crate root
pub use config::Config;
pub use error::{Result, VaultError};
pub use note::Note;
pub use types::*;
pub use vault::Vault;
