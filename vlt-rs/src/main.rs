//! vlt CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vlt::cli::args::{Cli, Commands};
use vlt::cli::output::Output;
use vlt::cli::{delete, links, lint, list, rename, resolve, search, tags, vaults};
use vlt::config::Config;
use vlt::error::VaultError;
use vlt::vault::Vault;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flags.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vlt={}", cli.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), VaultError> {
    let config = Config::load()?;
    let output = Output::new(cli.output_format(), cli.quiet);

    if matches!(cli.command, Commands::Vaults) {
        return vaults::run(&config, &output);
    }

    let vault_path = config.resolve_vault_path(cli.vault.as_deref())?;
    let vault = Vault::open(vault_path)?;
    tracing::debug!(root = %vault.root.display(), "opened vault");

    match &cli.command {
        Commands::Vaults => vaults::run(&config, &output),
        Commands::Resolve(args) => resolve::run(&vault, args, &output),
        Commands::Read(args) => resolve::read(&vault, args, &output),
        Commands::Search(args) => search::run(&vault, args, &output),
        Commands::Files(args) => list::run(&vault, args, &output),
        Commands::Backlinks(args) => links::backlinks(&vault, args, &output),
        Commands::Links(args) => links::links(&vault, args, &output),
        Commands::Orphans => lint::orphans(&vault, &output),
        Commands::Unresolved => lint::unresolved(&vault, &output),
        Commands::Tags(args) => tags::list(&vault, args, &output),
        Commands::Tag(args) => tags::find(&vault, args, &output),
        Commands::Move(args) => rename::run(&vault, args, &output),
        Commands::Delete(args) => delete::run(&vault, args, &output),
    }
}
