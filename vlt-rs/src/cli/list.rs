//! Files command implementation.

use crate::cli::args::FilesArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::{FileFilter, Vault};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct FilesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PathBuf>>,
    pub total: usize,
}

pub fn run(vault: &Vault, args: &FilesArgs, output: &Output) -> Result<()> {
    let filter = FileFilter {
        folder: args.folder.as_ref().map(PathBuf::from),
        extension: Some(args.ext.clone()),
        glob: args.glob.clone(),
    };
    let files = vault.list_files(&filter)?;

    output.print(&FilesResponse {
        total: files.len(),
        files: (!args.total).then_some(files),
    })
}
