use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Dashboard rollup over a Monday-start week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_minutes: i64,
    /// Distinct dates with at least one completed session.
    pub days_worked: usize,
    pub average_daily_minutes: i64,
}

impl WeeklyStats {
    /// (hours, minutes) split of the total.
    pub fn total_hm(&self) -> (i64, i64) {
        (self.total_minutes / 60, self.total_minutes % 60)
    }

    pub fn average_hm(&self) -> (i64, i64) {
        (
            self.average_daily_minutes / 60,
            self.average_daily_minutes % 60,
        )
    }
}

/// Whether the employee is currently clocked in, and for how long.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStatus {
    pub is_clocked_in: bool,
    pub since: Option<DateTime<Utc>>,
    pub elapsed_seconds: i64,
}
