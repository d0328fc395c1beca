use crate::cli::parser::Commands;
use crate::config::Configuration;
use crate::core::validate;
use crate::errors::AppResult;
use crate::ui::messages::Messenger;
use crate::utils::formatting::bold;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, config_path: &Path, msg: &Messenger) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let cfg = Configuration::load(config_path)?;

        // ---- PRINT CONFIG ----
        // Printing is the default when no flag is given.
        if *print_config || !*check {
            msg.info(format!("Current configuration: {}", config_path.display()));
            println!("{}", cfg.to_json_pretty()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let plan = validate(&cfg)?;
            let days = plan.working_dates();
            msg.success(format!(
                "Configuration is valid: {} working days between {} and {}",
                bold(&days.len().to_string()),
                plan.from,
                plan.until
            ));
        }
    }

    Ok(())
}
