//! Unified application error type.
//! All modules (config, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// A configuration sanity failure, identified by a numeric code.
///
/// - `0` → `from` is after `until`
/// - `1` → daily begin is not before daily end
/// - `2` → delta or pause negative or too large
/// - `3` → unparseable date, time or weekday
/// - `4` → start id negative, or too large for the rows in range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error code {code}: err {msg}")]
pub struct ConfigError {
    pub code: i32,
    pub msg: String,
}

impl ConfigError {
    pub const FROM_AFTER_UNTIL: i32 = 0;
    pub const BEGIN_AFTER_END: i32 = 1;
    pub const INVALID_AMOUNT: i32 = 2;
    pub const UNPARSEABLE: i32 = 3;
    pub const INVALID_ID: i32 = 4;

    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    // ---------------------------
    // Generation errors
    // ---------------------------
    #[error("Time zone error: {0}")]
    Timezone(String),

    #[error("Value out of range: {0}")]
    Overflow(String),
}

impl AppError {
    /// Numeric validation code, when the error comes from the validator.
    pub fn config_code(&self) -> Option<i32> {
        match self {
            AppError::Config(e) => Some(e.code),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
