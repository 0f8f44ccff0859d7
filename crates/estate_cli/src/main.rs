//! Inspection entry point for the sample data source.
//!
//! # Responsibility
//! - Verify `estate_core` wiring outside any presentation layer.
//! - Keep output deterministic for quick local sanity checks.

mod cli;
mod commands;

use clap::Parser;
use estate_core::{
    default_log_level, init_logging_with, LoggingConfig, LoggingError, SampleDataSource,
};
use log::info;

use crate::cli::{Cli, Command};
use crate::commands::{run_group, run_groups, run_item, run_preview};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = start_logging(&cli) {
        eprintln!("error: failed to initialize logging: {err}");
        std::process::exit(1);
    }

    let source = match SampleDataSource::new() {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        estate_core::core_version()
    );

    let result = match &cli.command {
        Command::Groups { collection } => run_groups(&source, collection),
        Command::Group { unique_id } => run_group(&source, unique_id),
        Command::Item { unique_id } => run_item(&source, unique_id),
        Command::Preview { unique_id } => run_preview(&source, unique_id),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn start_logging(cli: &Cli) -> Result<(), LoggingError> {
    let Some(log_dir) = cli.log_dir.as_ref() else {
        return Ok(());
    };
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging_with(&LoggingConfig::new(level, log_dir)?)
}
