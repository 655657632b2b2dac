use chrono::NaiveDate;
use serde::Serialize;

use super::day_record::DayRecord;

/// Aggregate fields shared by week and month summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub total_hours: f64,
    pub total_break_hours: f64,
    pub working_days: usize,
    pub overtime_days: usize,
    pub short_hours_days: usize,
    pub average_daily: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    #[serde(flatten)]
    pub totals: PeriodTotals,
    pub records: Vec<DayRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    #[serde(flatten)]
    pub totals: PeriodTotals,
    pub weeks: Vec<WeekSummary>,
    pub records: Vec<DayRecord>,
    /// Sunday-start grid padded to whole weeks.
    pub calendar: Vec<NaiveDate>,
}

impl MonthSummary {
    /// Grid rows of seven dates each.
    pub fn calendar_rows(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.calendar.chunks(7)
    }
}
