use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Status output for the user.
///
/// Everything goes to stderr: stdout is reserved for the generated SQL.
/// A quiet messenger still reports errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messenger {
    quiet: bool,
}

impl Messenger {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn info<T: fmt::Display>(&self, msg: T) {
        self.emit(FG_BLUE, ICON_INFO, msg);
    }

    pub fn success<T: fmt::Display>(&self, msg: T) {
        self.emit(FG_GREEN, ICON_OK, msg);
    }

    pub fn warning<T: fmt::Display>(&self, msg: T) {
        self.emit(FG_YELLOW, ICON_WARN, msg);
    }

    fn emit<T: fmt::Display>(&self, color: &str, icon: &str, msg: T) {
        if !self.quiet {
            eprintln!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
        }
    }
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}
