use anyhow::Result;
use clap::Parser;
use ssd_explorer::cli::{Cli, Commands};
use ssd_explorer::commands::{self, Session};
use ssd_explorer::config::{self, ExplorerConfig};
use ssd_explorer::observability::init_tracing;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    if let Commands::Init { force } = cli.command {
        return commands::init_config(&std::env::current_dir()?, force);
    }

    let session = Session::new(load_config(&cli)?, cli.catalog, cli.format, cli.color);
    let stdout = io::stdout().lock();

    match cli.command {
        Commands::List { filters } => commands::run_list(&session, &filters, stdout),
        Commands::Show { reference } => commands::run_show(&session, &reference, stdout),
        Commands::Vocab { facet } => commands::run_vocab(&session, facet, stdout),
        Commands::Init { .. } => Ok(()),
    }
}

// An explicit --config must load; discovery falls back to defaults
fn load_config(cli: &Cli) -> Result<ExplorerConfig> {
    match &cli.config {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}
