//! Event normalizer: narrows service payloads into typed events and
//! derives the time each session contributes.

use crate::models::{AttendanceRecordDto, RawAttendanceEvent};
use crate::utils::date::parse_date;
use crate::utils::time::{clamped_between, parse_instant};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};

/// One session with its contribution computed against a given `now`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSession {
    pub event: RawAttendanceEvent,
    pub worked: TimeDelta,
}

/// Narrow one payload. Records without an employee or a readable date
/// cannot be grouped and are dropped; unreadable timestamps become `None`.
pub fn narrow(dto: &AttendanceRecordDto) -> Option<RawAttendanceEvent> {
    let employee_id = dto.employee?;
    let date = dto.date.as_deref().and_then(parse_date)?;

    let check_in = dto.check_in_time.as_deref().and_then(|s| {
        let parsed = parse_instant(s);
        if parsed.is_none() {
            warn!(attendance_id = ?dto.attendance_id, raw = s, "unreadable check-in time");
        }
        parsed
    });
    let check_out = dto.check_out_time.as_deref().and_then(|s| {
        let parsed = parse_instant(s);
        if parsed.is_none() {
            warn!(attendance_id = ?dto.attendance_id, raw = s, "unreadable check-out time");
        }
        parsed
    });

    Some(RawAttendanceEvent {
        id: dto.attendance_id.unwrap_or_default(),
        employee_id,
        date,
        check_in,
        check_out,
        status: dto.status.clone().unwrap_or_default(),
    })
}

pub fn narrow_all(dtos: &[AttendanceRecordDto]) -> Vec<RawAttendanceEvent> {
    let events: Vec<RawAttendanceEvent> = dtos.iter().filter_map(narrow).collect();

    if events.len() != dtos.len() {
        warn!(
            dropped = dtos.len() - events.len(),
            "attendance records without employee or date were ignored"
        );
    }
    debug!(count = events.len(), "narrowed attendance records");

    events
}

/// Time contributed by one session:
/// - closed session → check-out minus check-in
/// - open session → `now` minus check-in
/// - no check-in → nothing
///
/// Negative spans are clamped to zero.
pub fn worked(event: &RawAttendanceEvent, now: DateTime<Utc>) -> TimeDelta {
    match (event.check_in, event.check_out) {
        (Some(start), Some(end)) => clamped_between(start, end),
        (Some(start), None) => clamped_between(start, now),
        (None, _) => TimeDelta::zero(),
    }
}

pub fn normalize(event: RawAttendanceEvent, now: DateTime<Utc>) -> NormalizedSession {
    let worked = worked(&event, now);
    NormalizedSession { event, worked }
}
