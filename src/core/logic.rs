use crate::core::calculator::{activity, normalize, period, sessions, stats};
use crate::models::{
    AttendanceRecordDto, CurrentStatus, DayRecord, MonthSummary, RawAttendanceEvent,
    RecentActivity, WeekSummary, WeeklyStats,
};
use chrono::{DateTime, NaiveDate, Utc};

pub struct Core;

impl Core {
    /// Narrow payloads and keep only the given employee's events.
    pub fn events_for(dtos: &[AttendanceRecordDto], employee_id: i64) -> Vec<RawAttendanceEvent> {
        normalize::narrow_all(dtos)
            .into_iter()
            .filter(|e| e.employee_id == employee_id)
            .collect()
    }

    /// Full pipeline: payloads → one record per date, most recent first.
    pub fn build_day_records(
        dtos: &[AttendanceRecordDto],
        employee_id: i64,
        target_hours: f64,
        now: DateTime<Utc>,
    ) -> Vec<DayRecord> {
        let events = Self::events_for(dtos, employee_id);
        sessions::aggregate(&events, target_hours, now)
    }

    /// Record for one date, or the all-zero placeholder when nothing was logged.
    pub fn build_day(
        dtos: &[AttendanceRecordDto],
        employee_id: i64,
        date: NaiveDate,
        target_hours: f64,
        now: DateTime<Utc>,
    ) -> DayRecord {
        let day: Vec<_> = Self::events_for(dtos, employee_id)
            .into_iter()
            .filter(|e| e.date == date)
            .map(|e| normalize::normalize(e, now))
            .collect();

        sessions::merge_day(day, target_hours)
            .unwrap_or_else(|| DayRecord::placeholder(employee_id, date))
    }

    pub fn find_day(records: &[DayRecord], date: NaiveDate) -> Option<&DayRecord> {
        records.iter().find(|r| r.date == date)
    }

    pub fn week(records: &[DayRecord], anchor: NaiveDate) -> WeekSummary {
        period::summarize_week(records, anchor)
    }

    pub fn month(records: &[DayRecord], anchor: NaiveDate) -> MonthSummary {
        period::summarize_month(records, anchor)
    }

    pub fn weekly_stats(
        dtos: &[AttendanceRecordDto],
        employee_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> WeeklyStats {
        stats::weekly_stats(&normalize::narrow_all(dtos), employee_id, start, end)
    }

    pub fn recent(
        dtos: &[AttendanceRecordDto],
        employee_id: i64,
        limit: usize,
    ) -> Vec<RecentActivity> {
        activity::recent_activities(&Self::events_for(dtos, employee_id), limit)
    }

    pub fn status(records: &[DayRecord], today: NaiveDate, now: DateTime<Utc>) -> CurrentStatus {
        activity::current_status(Self::find_day(records, today), now)
    }
}
