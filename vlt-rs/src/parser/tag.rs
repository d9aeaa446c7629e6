//! Tag parsing (`#tag`, `#tag/subtag`) and frontmatter `tags`.

use super::frontmatter::{extract, get_list};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Frontmatter key holding a note's tags.
pub const TAGS_KEY: &str = "tags";

// A `#` at the start of the text or after a character that is not a word
// character, `&` (HTML entity) or another `#` (headings), then the tag body.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\w&#])#([\w][\w/-]*)").unwrap());

/// Byte ranges of fenced code blocks (```` ``` ```` or `~~~`).
fn fenced_ranges(text: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut open: Option<usize> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            match open.take() {
                Some(start) => ranges.push((start, offset + line.len())),
                None => open = Some(offset),
            }
        }
        offset += line.len();
    }
    if let Some(start) = open {
        ranges.push((start, text.len()));
    }
    ranges
}

/// Inline tags in `text`, without the `#`, in order of appearance.
///
/// Purely numeric tags (`#42`) and tags inside fenced code are skipped.
/// Case is preserved and repeats are kept.
pub fn parse_inline(text: &str) -> Vec<String> {
    let fences = fenced_ranges(text);
    TAG.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter(|m| !fences.iter().any(|&(s, e)| m.start() >= s && m.start() < e))
        .map(|m| m.as_str().trim_end_matches(['/', '-']))
        .filter(|tag| !tag.is_empty() && !tag.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

/// Tags listed under the frontmatter `tags` key. A leading `#` is dropped
/// and a comma-separated scalar is split.
pub fn frontmatter_tags(yaml: &str) -> Vec<String> {
    get_list(yaml, TAGS_KEY)
        .iter()
        .flat_map(|item| item.split(','))
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Canonical form of a tag: trimmed, no leading `#`, lowercase.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().trim_start_matches('#').to_lowercase()
}

/// Every tag of a note, frontmatter first, then the body.
///
/// Tags are normalized, so `Project` and `#project` are one tag; each
/// appears once, at its first occurrence.
pub fn note_tags(text: &str) -> Vec<String> {
    let fm = extract(text);
    let from_frontmatter = if fm.found {
        frontmatter_tags(fm.yaml)
    } else {
        Vec::new()
    };

    let mut seen = HashSet::new();
    from_frontmatter
        .into_iter()
        .chain(parse_inline(fm.body).into_iter().map(|t| normalize_tag(&t)))
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

/// Whether `tag` is `query` or one of its subtags. Both must be normalized.
pub fn tag_matches(tag: &str, query: &str) -> bool {
    tag == query
        || tag
            .strip_prefix(query)
            .is_some_and(|rest| rest.starts_with('/'))
}
