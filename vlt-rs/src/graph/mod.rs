//! Link graph: resolution, queries and rename propagation.

pub mod index;
mod link_graph;
pub mod rename;
pub mod resolution;

pub use index::{IndexedNote, NoteIndex};
pub use link_graph::{backlinks, orphans, outgoing_links, unresolved};
pub use rename::{plan_rename, propagate, PlannedUpdate};
pub use resolution::{rank, resolve_note};
