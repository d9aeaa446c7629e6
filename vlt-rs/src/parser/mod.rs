//! Parsers for Obsidian markdown syntax.

pub mod frontmatter;
pub mod tag;
pub mod wikilink;

pub use frontmatter::{aliases, extract, get_list, get_value, Frontmatter};
pub use tag::{normalize_tag, note_tags, parse_inline, tag_matches};
pub use wikilink::{apply_edits, links_to, parse, rewrite_title, title_edits};

/// Tracks 1-indexed line numbers while scanning matches left to right.
pub(crate) struct LineCounter<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0, line: 1 }
    }

    /// Line of `offset`. Offsets must be non-decreasing across calls.
    pub(crate) fn line_at(&mut self, offset: usize) -> usize {
        self.line += self.text[self.pos..offset].matches('\n').count();
        self.pos = offset;
        self.line
    }
}
