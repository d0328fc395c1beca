use crate::cli::parser::Commands;
use crate::config::Configuration;
use crate::errors::AppResult;
use crate::ui::messages::Messenger;
use crate::utils::fs_utils::ensure_writable;
use std::path::Path;

/// Handle the `init` command: write the sample configuration
pub fn handle(cmd: &Commands, config_path: &Path, msg: &Messenger) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        ensure_writable(config_path, *force, msg)?;
        Configuration::sample().save(config_path)?;
        msg.success(format!("Config file: {}", config_path.display()));
    }
    Ok(())
}
