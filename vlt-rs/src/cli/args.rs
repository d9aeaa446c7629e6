//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "vlt")]
#[command(author, version, about = "Link-graph queries and safe renames for Obsidian vaults", long_about = None)]
pub struct Cli {
    /// Vault path or name (overrides VLT_VAULT and the config default)
    #[arg(long, global = true)]
    pub vault: Option<String>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }

    /// Default log filter for the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known vaults
    Vaults,

    /// Resolve a title or alias to a note path
    Resolve(TitleArgs),

    /// Print a note's raw content
    Read(TitleArgs),

    /// Search note titles and content
    Search(SearchArgs),

    /// List files in the vault
    Files(FilesArgs),

    /// Notes linking to a title
    Backlinks(TitleArgs),

    /// Outgoing links of a note, resolved or broken
    Links(TitleArgs),

    /// Notes nothing links to
    Orphans,

    /// Link targets matching no note
    Unresolved,

    /// List every tag in the vault
    Tags(TagsArgs),

    /// Notes carrying a tag or one of its subtags
    Tag(TagArgs),

    /// Move or rename a note, updating links to it
    #[command(alias = "rename")]
    Move(MoveArgs),

    /// Move a note to the trash, or delete it
    Delete(DeleteArgs),
}

#[derive(Parser, Debug)]
pub struct TitleArgs {
    /// Note title or alias
    pub title: String,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search text, with optional [key:value] frontmatter filters
    pub query: String,

    /// Limit the search to a folder
    #[arg(long)]
    pub path: Option<String>,
}

#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Limit the listing to a folder
    #[arg(long)]
    pub folder: Option<String>,

    /// File extension
    #[arg(long, default_value = "md")]
    pub ext: String,

    /// Only paths matching this glob
    #[arg(long)]
    pub glob: Option<String>,

    /// Print only the number of files
    #[arg(long)]
    pub total: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TagSort {
    /// Alphabetical by tag
    #[default]
    Name,
    /// Most-used first
    Count,
}

#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Include the number of notes per tag
    #[arg(long)]
    pub counts: bool,

    /// Sort order
    #[arg(long, value_enum, default_value_t = TagSort::Name)]
    pub sort: TagSort,
}

#[derive(Parser, Debug)]
pub struct TagArgs {
    /// Tag name, with or without the leading #
    pub tag: String,
}

#[derive(Parser, Debug)]
pub struct MoveArgs {
    /// Current note path
    pub from: String,

    /// New note path
    pub to: String,

    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note title or alias
    #[arg(required_unless_present = "path", conflicts_with = "path")]
    pub title: Option<String>,

    /// Note path instead of a title
    #[arg(long)]
    pub path: Option<String>,

    /// Delete permanently instead of moving to .trash
    #[arg(long)]
    pub permanent: bool,
}
