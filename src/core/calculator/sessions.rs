//! Session aggregator: merges every session of one (employee, date) into a
//! single [`DayRecord`].

use crate::core::calculator::classify::{build_activities, flags};
use crate::core::calculator::normalize::{NormalizedSession, normalize};
use crate::models::{DayRecord, RawAttendanceEvent};
use crate::utils::time::hours;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;

pub type DayKey = (i64, NaiveDate);

/// Ascending by check-in; sessions without one go last in input order.
fn by_check_in(a: &NormalizedSession, b: &NormalizedSession) -> Ordering {
    match (a.event.check_in, b.event.check_in) {
        (Some(x), Some(y)) => x
            .cmp(&y)
            .then_with(|| match (a.event.check_out, b.event.check_out) {
                (Some(p), Some(q)) => p.cmp(&q),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.event.id.cmp(&b.event.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_sessions(sessions: &mut [NormalizedSession]) {
    // sort_by is stable
    sessions.sort_by(by_check_in);
}

/// Merge the sessions of one day. Returns `None` for an empty slice.
pub fn merge_day(mut sessions: Vec<NormalizedSession>, target_hours: f64) -> Option<DayRecord> {
    sort_sessions(&mut sessions);

    let first = sessions.first()?;
    let last = sessions.last()?;

    // Sum of each session, not last check-out minus first check-in:
    // the gaps between sessions are not work.
    let worked: TimeDelta = sessions
        .iter()
        .fold(TimeDelta::zero(), |acc, s| acc + s.worked);
    let total_hours = hours(worked);
    let (is_overtime, is_short_hours) = flags(total_hours, target_hours);

    Some(DayRecord {
        employee_id: first.event.employee_id,
        date: first.event.date,
        check_in: first.event.check_in,
        check_out: last.event.check_out,
        total_hours,
        break_hours: 0.0,
        is_overtime,
        is_short_hours,
        sessions: sessions.len(),
        activities: build_activities(&sessions),
    })
}

/// Normalize and bucket events by (employee, date), keeping input order
/// inside each bucket.
pub fn group_by_day(
    events: &[RawAttendanceEvent],
    now: DateTime<Utc>,
) -> BTreeMap<DayKey, Vec<NormalizedSession>> {
    let mut groups: BTreeMap<DayKey, Vec<NormalizedSession>> = BTreeMap::new();

    for ev in events {
        groups
            .entry((ev.employee_id, ev.date))
            .or_default()
            .push(normalize(ev.clone(), now));
    }

    groups
}

/// One record per (employee, date), most recent date first.
pub fn aggregate(
    events: &[RawAttendanceEvent],
    target_hours: f64,
    now: DateTime<Utc>,
) -> Vec<DayRecord> {
    let mut records: Vec<DayRecord> = group_by_day(events, now)
        .into_values()
        .filter_map(|sessions| merge_day(sessions, target_hours))
        .collect();

    records.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });
    records
}
