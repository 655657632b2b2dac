//! Dashboard weekly stats. Weeks start on Monday here, unlike the
//! Sunday-start week summary, and only completed sessions count.

use crate::models::{RawAttendanceEvent, WeeklyStats};
use crate::utils::date::{add_days, monday_on_or_before};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Monday..Sunday range containing `today`.
pub fn week_range_monday(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = monday_on_or_before(today);
    (monday, add_days(monday, 6))
}

/// Whole minutes of a completed session, rounded, never negative.
fn session_minutes(ev: &RawAttendanceEvent) -> Option<i64> {
    let (start, end) = (ev.check_in?, ev.check_out?);
    let ms = (end - start).num_milliseconds().max(0);
    Some((ms as f64 / 60_000.0).round() as i64)
}

pub fn weekly_stats(
    events: &[RawAttendanceEvent],
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> WeeklyStats {
    let mut total_minutes = 0i64;
    let mut dates = BTreeSet::new();

    for ev in events
        .iter()
        .filter(|e| e.employee_id == employee_id && e.date >= start && e.date <= end)
    {
        if let Some(m) = session_minutes(ev) {
            total_minutes += m;
            dates.insert(ev.date);
        }
    }

    let days_worked = dates.len();
    let average_daily_minutes = if days_worked > 0 {
        (total_minutes as f64 / days_worked as f64).round() as i64
    } else {
        0
    };

    WeeklyStats {
        start,
        end,
        total_minutes,
        days_worked,
        average_daily_minutes,
    }
}
