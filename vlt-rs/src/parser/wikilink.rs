//! Wikilink and embed parsing, and in-place title rewriting.

use super::LineCounter;
use crate::types::{TextEdit, TitleKey, WikiLink};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// (!?)               - Optional ! for embeds (group 1)
// \[\[               - Opening [[
// ([^\]#|]+?)        - Title, up to the first ], # or | (group 2)
// (?:#([^\]|]*))?    - Heading (group 3)
// (?:\|([^\]]*))?    - Display text (group 4)
// \]\]               - Closing ]]
static WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[\[([^\]#|]+?)(?:#([^\]|]*))?(?:\|([^\]]*))?\]\]").unwrap()
});

fn link_from_captures(caps: &Captures<'_>, line: usize) -> Option<WikiLink> {
    let full = caps.get(0)?;
    let title = caps.get(2)?.as_str().trim();
    if title.is_empty() {
        return None;
    }

    Some(WikiLink {
        title: title.to_string(),
        heading: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
        display: caps.get(4).map(|m| m.as_str().to_string()).unwrap_or_default(),
        embed: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
        raw: full.as_str().to_string(),
        line,
        start: full.start(),
        end: full.end(),
    })
}

/// Parse all wikilinks and embeds from text, in order of appearance.
///
/// Links are not deduplicated. Unbalanced brackets produce no record, and
/// neither does a link whose title is blank.
pub fn parse(text: &str) -> Vec<WikiLink> {
    let mut lines = LineCounter::new(text);
    WIKILINK
        .captures_iter(text)
        .filter_map(|caps| {
            let line = lines.line_at(caps.get(0)?.start());
            link_from_captures(&caps, line)
        })
        .collect()
}

/// Whether `text` contains a link or embed whose title folds to `key`.
pub fn links_to(text: &str, key: &TitleKey) -> bool {
    WIKILINK.captures_iter(text).any(|caps| {
        caps.get(2)
            .map(|m| m.as_str().trim())
            .is_some_and(|title| !title.is_empty() && TitleKey::new(title) == *key)
    })
}

/// Compute the edits that retarget every link titled `old_title` to `new_title`.
///
/// Matching is case-insensitive on the whole title segment, so a link must
/// end its title at `]`, `#` or `|` to match and `[[Old Note Extended]]` is
/// never touched when renaming `Old Note`. Only the title bytes change; the
/// embed marker, inner whitespace, heading and display text are preserved.
pub fn title_edits(text: &str, old_title: &str, new_title: &str) -> Vec<TextEdit> {
    let old_key = TitleKey::new(old_title.trim());
    let mut lines = LineCounter::new(text);
    let mut edits = Vec::new();

    for caps in WIKILINK.captures_iter(text) {
        let (Some(full), Some(segment)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let raw_title = segment.as_str();
        let title = raw_title.trim();
        if title.is_empty() || TitleKey::new(title) != old_key {
            continue;
        }

        let lead = raw_title.len() - raw_title.trim_start().len();
        let title_start = segment.start() + lead;
        let title_end = title_start + title.len();

        let new = format!(
            "{}{}{}",
            &text[full.start()..title_start],
            new_title,
            &text[title_end..full.end()]
        );
        if new == full.as_str() {
            continue;
        }

        edits.push(TextEdit {
            line: lines.line_at(full.start()),
            start: full.start(),
            end: full.end(),
            old: full.as_str().to_string(),
            new,
        });
    }

    edits
}

/// Retarget every link titled `old_title` to `new_title`.
///
/// Returns the input unchanged (byte for byte) when nothing matches.
pub fn rewrite_title(text: &str, old_title: &str, new_title: &str) -> String {
    apply_edits(text, &title_edits(text, old_title, new_title))
}

/// Apply non-overlapping edits sorted by position.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    for edit in edits {
        out.push_str(&text[pos..edit.start]);
        out.push_str(&edit.new);
        pos = edit.end;
    }
    out.push_str(&text[pos..]);
    out
}
