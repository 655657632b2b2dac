// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_rows;
use crate::export::range::parse_range;
use crate::models::DayRecord;
use crate::ui::messages::warning;
use crate::utils::path::absolute_target;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export day records.
    ///
    /// - `file`: absolute output path (`~/` allowed)
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   their `start:end` forms
    ///
    /// Returns the number of records written.
    pub fn export_days(
        records: &[DayRecord],
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = target(file)?;
        ensure_writable(&path, force)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let mut selected: Vec<DayRecord> = records
            .iter()
            .filter(|r| bounds.is_none_or(|(s, e)| r.date >= s && r.date <= e))
            .cloned()
            .collect();
        selected.sort_by_key(|r| r.date);

        if selected.is_empty() {
            warning("No attendance records found for selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&to_rows(&selected), &path)?,
            ExportFormat::Json => export_json(&selected, &path)?,
        }

        Ok(selected.len())
    }

    /// Export a week or month summary. Nested summaries only fit JSON.
    pub fn export_summary<T: Serialize>(
        summary: &T,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if format != ExportFormat::Json {
            return Err(AppError::Export(format!(
                "summaries can only be exported as json, not {}",
                format.as_str()
            )));
        }

        let path = target(file)?;
        ensure_writable(&path, force)?;
        export_json(summary, &path)
    }
}

fn target(file: &str) -> AppResult<PathBuf> {
    absolute_target(file)
        .ok_or_else(|| AppError::Export(format!("Output file path must be absolute: {file}")))
}
