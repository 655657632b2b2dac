//! Period summarizer: Sunday-start weeks, calendar months and the padded
//! month grid.

use crate::models::{DayRecord, MonthSummary, PeriodTotals, WeekSummary};
use crate::utils::date::{
    add_days, all_days_of_month, first_day_of_month, last_day_of_month, sunday_on_or_before,
};
use chrono::{Datelike, NaiveDate};

/// Sums and counts over a set of day records.
pub fn reduce(records: &[DayRecord]) -> PeriodTotals {
    let total_hours: f64 = records.iter().map(|r| r.total_hours).sum();
    let total_break_hours: f64 = records.iter().map(|r| r.break_hours).sum();
    let working_days = records.len();

    PeriodTotals {
        total_hours,
        total_break_hours,
        working_days,
        overtime_days: records.iter().filter(|r| r.is_overtime).count(),
        short_hours_days: records.iter().filter(|r| r.is_short_hours).count(),
        average_daily: if working_days > 0 {
            total_hours / working_days as f64
        } else {
            0.0
        },
    }
}

/// Copies of the records whose date falls in `[start, end]`, oldest first.
fn select(records: &[DayRecord], start: NaiveDate, end: NaiveDate) -> Vec<DayRecord> {
    let mut out: Vec<DayRecord> = records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .cloned()
        .collect();
    out.sort_by_key(|r| r.date);
    out
}

/// Summary of the seven days starting at `start`, as given.
pub fn summarize_window(records: &[DayRecord], start: NaiveDate) -> WeekSummary {
    let end = add_days(start, 6);
    let selected = select(records, start, end);

    WeekSummary {
        week_start: start,
        week_end: end,
        totals: reduce(&selected),
        records: selected,
    }
}

/// Summary of the Sunday-start week containing `anchor`.
pub fn summarize_week(records: &[DayRecord], anchor: NaiveDate) -> WeekSummary {
    summarize_window(records, sunday_on_or_before(anchor))
}

/// Dates of the month padded with the previous month's tail and the next
/// month's head so the grid runs Sunday to Saturday.
pub fn calendar_grid(year: i32, month: u32) -> Vec<NaiveDate> {
    let days = all_days_of_month(year, month);
    let (Some(first), Some(last)) = (days.first().copied(), days.last().copied()) else {
        return Vec::new();
    };

    let lead = first.weekday().num_days_from_sunday() as i64;
    let trail = 6 - last.weekday().num_days_from_sunday() as i64;

    let mut grid = Vec::with_capacity(days.len() + 12);
    grid.extend((1..=lead).rev().map(|i| add_days(first, -i)));
    grid.extend(days);
    grid.extend((1..=trail).map(|i| add_days(last, i)));
    grid
}

/// Summary of the calendar month containing `anchor`.
///
/// Sub-weeks are 7-day windows stepped from the 1st of the month; windows
/// without any record are left out.
pub fn summarize_month(records: &[DayRecord], anchor: NaiveDate) -> MonthSummary {
    let first_day = first_day_of_month(anchor);
    let last_day = last_day_of_month(anchor);
    let month_records = select(records, first_day, last_day);

    let mut weeks = Vec::new();
    let mut week_start = first_day;
    while week_start <= last_day {
        let week = summarize_window(records, week_start);
        if week.totals.working_days > 0 {
            weeks.push(week);
        }
        week_start = add_days(week_start, 7);
    }

    MonthSummary {
        year: first_day.year(),
        month: first_day.month(),
        first_day,
        last_day,
        totals: reduce(&month_records),
        weeks,
        records: month_records,
        calendar: calendar_grid(first_day.year(), first_day.month()),
    }
}
