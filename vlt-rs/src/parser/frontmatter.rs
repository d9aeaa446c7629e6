//! YAML frontmatter extraction and list lookup.
//!
//! Only the pieces the link graph needs live here: finding the block,
//! and reading list/scalar values out of it (chiefly `aliases`).

use serde_yaml::Value;

/// Frontmatter key holding a note's alternate titles.
pub const ALIASES_KEY: &str = "aliases";

/// Frontmatter extraction result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// The raw YAML between the delimiters (without them). Empty when absent.
    pub yaml: &'a str,

    /// The content after the closing delimiter line.
    pub body: &'a str,

    /// Line number where the body starts (1-indexed).
    pub body_start_line: usize,

    /// Whether a complete frontmatter block was found.
    pub found: bool,
}

impl<'a> Frontmatter<'a> {
    fn absent(text: &'a str) -> Self {
        Self {
            yaml: "",
            body: text,
            body_start_line: 1,
            found: false,
        }
    }
}

/// Split text into its frontmatter block and body.
///
/// The first line must be `---` (surrounding whitespace ignored) and the
/// block ends at the next line that is `---`. An unterminated block means
/// there is no frontmatter.
pub fn extract(text: &str) -> Frontmatter<'_> {
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Frontmatter::absent(text);
    };
    if first.trim() != "---" {
        return Frontmatter::absent(text);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for (i, line) in lines.enumerate() {
        if line.trim() == "---" {
            let yaml = &text[yaml_start..offset];
            return Frontmatter {
                yaml: yaml.strip_suffix('\n').unwrap_or(yaml),
                body: &text[offset + line.len()..],
                // opening line + i yaml lines + closing line, then 1-indexed
                body_start_line: i + 3,
                found: true,
            };
        }
        offset += line.len();
    }

    Frontmatter::absent(text)
}

/// Read a list value from a frontmatter block.
///
/// A YAML sequence yields its scalar items and a single scalar yields a
/// one-element list. Blocks that are not valid YAML are read line by line,
/// accepting `key: [a, b]`, `key: a`, and `key:` followed by `- a` items.
pub fn get_list(yaml: &str, key: &str) -> Vec<String> {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => match value.get(key) {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(other) => scalar_to_string(other).into_iter().collect(),
            None => Vec::new(),
        },
        Err(e) => {
            tracing::trace!(error = %e, "frontmatter is not valid YAML, reading lines");
            get_list_lines(yaml, key)
        }
    }
}

/// Read a scalar value from a frontmatter block.
pub fn get_value(yaml: &str, key: &str) -> Option<String> {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => value.get(key).and_then(scalar_to_string),
        Err(_) => get_value_lines(yaml, key),
    }
}

/// The alias list of a document's raw text. Empty when there is no frontmatter.
pub fn aliases(text: &str) -> Vec<String> {
    let fm = extract(text);
    if !fm.found {
        return Vec::new();
    }
    get_list(fm.yaml, ALIASES_KEY)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '"' || c == '\'')
}

fn get_list_lines(yaml: &str, key: &str) -> Vec<String> {
    let prefix = format!("{}:", key);
    let lines: Vec<&str> = yaml.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        let Some(value) = line.trim().strip_prefix(&prefix) else {
            continue;
        };
        let value = value.trim();

        if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
            return inner
                .split(',')
                .map(unquote)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if !value.is_empty() {
            return vec![unquote(value).to_string()];
        }

        let mut result = Vec::new();
        for next in &lines[i + 1..] {
            let t = next.trim();
            if let Some(item) = t.strip_prefix("- ") {
                let item = unquote(item);
                if !item.is_empty() {
                    result.push(item.to_string());
                }
            } else if !t.is_empty() {
                break;
            }
        }
        return result;
    }

    Vec::new()
}

fn get_value_lines(yaml: &str, key: &str) -> Option<String> {
    let prefix = format!("{}:", key);
    yaml.lines()
        .find_map(|line| line.trim().strip_prefix(&prefix).map(|v| unquote(v).to_string()))
}
