//! Path utilities: expand ~ and detect the stdout sentinel.

use std::path::PathBuf;

pub const STDOUT: &str = "stdout";

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn is_stdout(path: &str) -> bool {
    path.is_empty() || path == "-" || path.eq_ignore_ascii_case(STDOUT)
}
