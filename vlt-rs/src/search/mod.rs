//! Title and content search across vault notes.
//!
//! A query is free text plus optional `[key:value]` frontmatter filters:
//! `architecture [status:active] [type:decision]`.

pub mod matcher;
pub mod parser;
pub mod types;

pub use matcher::{evaluate_note, search};
pub use parser::parse_query;
pub use types::*;
