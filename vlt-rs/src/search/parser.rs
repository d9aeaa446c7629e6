//! Search query parsing.

use crate::error::{Result, VaultError};
use crate::search::types::{PropertyFilter, SearchQuery};
use regex::Regex;
use std::sync::LazyLock;

// \[            - Opening bracket
// ([^\]:]+)     - Key (group 1)
// :             - Separator
// ([^\]]*)      - Value (group 2)
// \]            - Closing bracket
static PROPERTY_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]:]+):([^\]]*)\]").unwrap());

/// Split a query string into free text and `[key:value]` filters.
///
/// Filters are removed from the text, which is then trimmed; inner spacing
/// is kept as written.
pub fn split_query(input: &str) -> SearchQuery {
    let filters = PROPERTY_FILTER
        .captures_iter(input)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str().trim();
            let value = caps.get(2)?.as_str().trim();
            (!key.is_empty()).then(|| PropertyFilter {
                key: key.to_string(),
                value: value.to_string(),
            })
        })
        .collect();

    SearchQuery {
        text: PROPERTY_FILTER.replace_all(input, "").trim().to_string(),
        filters,
    }
}

/// Parse a query string, rejecting one with neither text nor filters.
pub fn parse_query(input: &str) -> Result<SearchQuery> {
    let query = split_query(input);
    if query.is_empty() {
        return Err(VaultError::InvalidSearchQuery(format!(
            "empty query: {:?}",
            input
        )));
    }
    Ok(query)
}
