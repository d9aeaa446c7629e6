//! CLI command implementations.

pub mod args;
pub mod output;

pub mod delete;
pub mod links;
pub mod lint;
pub mod list;
pub mod rename;
pub mod resolve;
pub mod search;
pub mod tags;
pub mod vaults;

pub use args::{Cli, Commands};
pub use output::Output;
