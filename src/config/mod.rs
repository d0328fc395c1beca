use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Generator input, as read from the JSON configuration file.
///
/// Field values are kept as written so that the file round-trips;
/// `core::validate` turns them into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(rename = "startid", alias = "startId")]
    pub start_id: i64,
    #[serde(rename = "pauseMinutes", default)]
    pub pause_minutes: i64,
    pub userid: String,
    #[serde(rename = "clientId", default = "default_client_id")]
    pub client_id: String,
    pub from: String,
    pub until: String,
    #[serde(rename = "dailyBegin")]
    pub daily_begin: String,
    #[serde(rename = "dailyEnd")]
    pub daily_end: String,
    #[serde(rename = "beginDeltaS", default)]
    pub begin_delta_s: i64,
    #[serde(rename = "endDeltaS", default)]
    pub end_delta_s: i64,
    /// `None` means every day except Saturday and Sunday.
    #[serde(
        rename = "workingDays",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub working_days: Option<Vec<String>>,
    /// Per-weekday replacement of the daily window, keyed by weekday name.
    #[serde(
        rename = "dayWindows",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub day_windows: BTreeMap<String, DailyWindow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWindow {
    #[serde(rename = "dailyBegin")]
    pub daily_begin: String,
    #[serde(rename = "dailyEnd")]
    pub daily_end: String,
}

fn default_client_id() -> String {
    "0".to_string()
}

impl Configuration {
    /// Resolve the configuration path given on the command line.
    pub fn config_file(custom: Option<&str>) -> PathBuf {
        expand_tilde(custom.unwrap_or(DEFAULT_CONFIG_FILE))
    }

    /// Load and parse a configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Compact single-line JSON.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }

    /// Template written by `init`: a Monday to Friday week with a short Friday.
    pub fn sample() -> Self {
        let mut day_windows = BTreeMap::new();
        day_windows.insert(
            "Friday".to_string(),
            DailyWindow {
                daily_begin: "08:00.00".to_string(),
                daily_end: "13:00.00".to_string(),
            },
        );

        Self {
            start_id: 1,
            pause_minutes: 30,
            userid: "1".to_string(),
            client_id: "1".to_string(),
            from: "2023-01-02".to_string(),
            until: "2023-01-31".to_string(),
            daily_begin: "08:00.00".to_string(),
            daily_end: "16:30.00".to_string(),
            begin_delta_s: 900,
            end_delta_s: 1800,
            working_days: Some(
                ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                    .iter()
                    .map(|d| d.to_string())
                    .collect(),
            ),
            day_windows,
        }
    }
}
