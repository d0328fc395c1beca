//! ramostamp library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! configuration/generation modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Configuration;
use errors::AppResult;
use std::path::Path;
use ui::messages::Messenger;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, config_path: &Path, msg: &Messenger) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path, msg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path, msg),
        Commands::Generate { .. } => {
            cli::commands::generate::handle(&cli.command, config_path, msg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let msg = Messenger::new(cli.quiet);
    let config_path = Configuration::config_file(cli.config.as_deref());

    dispatch(&cli, &config_path, &msg)
}
