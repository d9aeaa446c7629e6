//! Search command implementation.

use crate::cli::args::SearchArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::search::{self, PropertyFilter, SearchResult};
use crate::vault::Vault;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<PropertyFilter>,
    pub results: Vec<SearchResult>,
    pub total: usize,
}

pub fn run(vault: &Vault, args: &SearchArgs, output: &Output) -> Result<()> {
    let query = search::parse_query(&args.query)?;
    let results = search::search(vault, &query, args.path.as_deref().map(Path::new))?;

    output.print(&SearchResponse {
        query: query.text,
        filters: query.filters,
        total: results.len(),
        results,
    })
}
