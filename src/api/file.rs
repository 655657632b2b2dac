//! Local JSON file holding an array of service records.
//! Re-read on every fetch so external edits show up on the next poll.

use super::source::{AttendanceSource, parse_records};
use crate::errors::AppResult;
use crate::models::AttendanceRecordDto;
use crate::utils::date;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::debug;

pub struct FileSource {
    path: PathBuf,
    today: Option<NaiveDate>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            today: None,
        }
    }

    /// Use a fixed date as "today" instead of the local calendar date.
    pub fn pinned(path: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self {
            path: path.into(),
            today: Some(today),
        }
    }

    async fn load(&self) -> AppResult<Vec<AttendanceRecordDto>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let records = parse_records(&content)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded attendance file");
        Ok(records)
    }

    fn dated(records: Vec<AttendanceRecordDto>, start: NaiveDate, end: NaiveDate) -> Vec<AttendanceRecordDto> {
        records
            .into_iter()
            .filter(|r| {
                r.date
                    .as_deref()
                    .and_then(date::parse_date)
                    .is_some_and(|d| d >= start && d <= end)
            })
            .collect()
    }
}

#[async_trait]
impl AttendanceSource for FileSource {
    async fn fetch_today(&self) -> AppResult<Vec<AttendanceRecordDto>> {
        let today = self.today.unwrap_or_else(date::today);
        Ok(Self::dated(self.load().await?, today, today))
    }

    async fn fetch_by_employee(&self, employee_id: i64) -> AppResult<Vec<AttendanceRecordDto>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|r| r.employee == Some(employee_id))
            .collect())
    }

    async fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<AttendanceRecordDto>> {
        Ok(Self::dated(self.load().await?, start, end))
    }
}
