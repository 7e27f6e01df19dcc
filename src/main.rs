mod cli;
mod application;
mod domain;
mod ui;
mod ml;
mod infra;

use anyhow::{Context, Result};
use cli::Cli;
use clap::Parser;
use std::{fs::File, sync::Mutex};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;
    cli.run()
}

/// The interactive form owns the terminal, so its logs go to a file.
/// Every other command logs to stderr.
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("titanic_survival=info".parse()?);

    match cli.log_file() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
