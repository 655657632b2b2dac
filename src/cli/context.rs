//! Per-invocation wiring: effective config, data source and shared loaders.

use crate::api::{AttendanceSource, FileSource, HttpSource};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::DayRecord;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;
use std::sync::Arc;

pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub source: Arc<dyn AttendanceSource>,
    pub target_hours: f64,
}

impl Context {
    /// Load the config file and apply command-line overrides.
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let (mut cfg, config_path) = resolve_config(cli)?;
        if let Some(data) = &cli.data {
            cfg.data_file = Some(data.clone());
        }
        if let Some(id) = cli.employee {
            cfg.employee_id = Some(id);
        }
        if let Some(api) = &cli.api {
            cfg.api_base_url = api.clone();
        }

        let target_hours = cfg.target_hours()?;
        let source: Arc<dyn AttendanceSource> = match &cfg.data_file {
            Some(file) => Arc::new(FileSource::new(expand_tilde(file))),
            None => Arc::new(HttpSource::new(&cfg.api_base_url, cfg.api_token.clone())?),
        };

        Ok(Self {
            cfg,
            config_path,
            source,
            target_hours,
        })
    }

    pub fn employee(&self) -> AppResult<i64> {
        self.cfg.employee()
    }

    /// Every day record of the employee, most recent first.
    pub async fn load_records(&self, employee_id: i64) -> AppResult<Vec<DayRecord>> {
        let dtos = self.source.fetch_by_employee(employee_id).await?;
        Ok(Core::build_day_records(
            &dtos,
            employee_id,
            self.target_hours,
            Utc::now(),
        ))
    }
}

/// Config file path (`--config` or the default location) and its parsed content.
pub fn resolve_config(cli: &Cli) -> AppResult<(Config, PathBuf)> {
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;
    Ok((cfg, config_path))
}

/// `--date` value or today.
pub fn date_or_today(raw: &Option<String>) -> AppResult<NaiveDate> {
    match raw {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}
