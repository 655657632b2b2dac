use crate::core::calculator::activity::DEFAULT_RECENT_LIMIT;
use crate::core::live::{DEFAULT_CLOCK_SECS, DEFAULT_POLL_SECS};
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_duration_minutes;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub employee_id: Option<i64>,
    /// Local JSON array of records; when set it replaces the HTTP service.
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default = "default_daily_target")]
    pub daily_target: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_clock_interval")]
    pub clock_interval_secs: u64,
    #[serde(default = "default_recent_limit")]
    pub recent_activity_limit: usize,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}
fn default_daily_target() -> String {
    "8h".to_string()
}
fn default_poll_interval() -> u64 {
    DEFAULT_POLL_SECS
}
fn default_clock_interval() -> u64 {
    DEFAULT_CLOCK_SECS
}
fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_token: None,
            employee_id: None,
            data_file: None,
            daily_target: default_daily_target(),
            poll_interval_secs: default_poll_interval(),
            clock_interval_secs: default_clock_interval(),
            recent_activity_limit: default_recent_limit(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path`, or defaults if the file is absent.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default configuration file unless one already exists.
    pub fn init_file(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Self::default().to_yaml()?)?;
        Ok(true)
    }

    /// Daily target in fractional hours.
    pub fn target_hours(&self) -> AppResult<f64> {
        let minutes = parse_duration_minutes(&self.daily_target)?;
        Ok(minutes as f64 / 60.0)
    }

    /// The employee whose attendance is shown; absent means no profile.
    pub fn employee(&self) -> AppResult<i64> {
        self.employee_id.ok_or(AppError::MissingProfile)
    }
}
