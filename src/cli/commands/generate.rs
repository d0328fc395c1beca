use crate::cli::parser::Commands;
use crate::config::Configuration;
use crate::core::{GenerateOptions, GenerationSummary, generate, validate};
use crate::errors::AppResult;
use crate::ui::messages::Messenger;
use crate::utils::fs_utils::ensure_writable;
use crate::utils::path::{expand_tilde, is_stdout};
use chrono::{Local, Utc};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Handle the `generate` subcommand
pub fn handle(cmd: &Commands, config_path: &Path, msg: &Messenger) -> AppResult<()> {
    if let Commands::Generate {
        out,
        comment,
        seed,
        utc,
        force,
    } = cmd
    {
        msg.info(format!(
            "Start reading configuration {}",
            config_path.display()
        ));
        let cfg = Configuration::load(config_path)?;
        msg.info(format!("Configuration:\n{}", cfg.to_json()?));

        let mut rng = match seed {
            Some(s) => Pcg64::seed_from_u64(*s),
            None => Pcg64::from_entropy(),
        };
        let opts = GenerateOptions {
            with_comment: *comment,
        };

        let summary = if is_stdout(out) {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            generate_in_zone(&cfg, &mut lock, opts, &mut rng, *utc)?
        } else {
            let path = expand_tilde(out);
            ensure_writable(&path, *force, msg)?;

            // An invalid configuration must not leave an empty file behind.
            validate(&cfg)?;

            let mut writer = BufWriter::new(File::create(&path)?);
            let summary = generate_in_zone(&cfg, &mut writer, opts, &mut rng, *utc)?;
            msg.success(format!("Output wrote to {}", path.display()));
            summary
        };

        report(&summary, msg);
    }
    Ok(())
}

fn generate_in_zone<W: Write, R: Rng>(
    cfg: &Configuration,
    writer: &mut W,
    opts: GenerateOptions,
    rng: &mut R,
    utc: bool,
) -> AppResult<GenerationSummary> {
    if utc {
        generate(cfg, writer, opts, rng, &Utc)
    } else {
        generate(cfg, writer, opts, rng, &Local)
    }
}

fn report(summary: &GenerationSummary, msg: &Messenger) {
    match (summary.first_id, summary.last_id) {
        (Some(first), Some(last)) => msg.success(format!(
            "Generated {} rows (ids {}..={})",
            summary.rows, first, last
        )),
        _ => msg.warning("No working day in the configured range, nothing generated"),
    }
}
