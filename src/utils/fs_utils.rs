use crate::errors::{AppError, AppResult};
use crate::ui::messages::Messenger;
use std::io::{self, Write};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` is set → Ok
/// - file exists and `force == false` → ask the user.
pub fn ensure_writable(path: &Path, force: bool, msg: &Messenger) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    msg.warning(format!("The file '{}' already exists.", path.display()));

    eprint!("Overwrite? [y/N]: ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        msg.info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(format!(
            "cancelled: existing file '{}' not overwritten",
            path.display()
        ))))
    }
}
