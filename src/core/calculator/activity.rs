use crate::models::{ActivityKind, CurrentStatus, DayRecord, RawAttendanceEvent, RecentActivity};
use crate::utils::time::local_hhmm;
use chrono::{DateTime, Utc};

pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Check-in/check-out activities of the given events, most recent first,
/// truncated to `limit`.
pub fn recent_activities(events: &[RawAttendanceEvent], limit: usize) -> Vec<RecentActivity> {
    let mut out = Vec::new();

    for ev in events {
        if let Some(at) = ev.check_in {
            out.push(RecentActivity {
                attendance_id: ev.id,
                kind: ActivityKind::Checkin,
                instant: at,
                description: format!("Clocked in at {}", local_hhmm(at)),
            });
        }
        if let Some(at) = ev.check_out {
            out.push(RecentActivity {
                attendance_id: ev.id,
                kind: ActivityKind::Checkout,
                instant: at,
                description: format!("Clocked out at {}", local_hhmm(at)),
            });
        }
    }

    out.sort_by(|a, b| b.instant.cmp(&a.instant));
    out.truncate(limit);
    out
}

/// Clocked-in state derived from today's record.
pub fn current_status(today: Option<&DayRecord>, now: DateTime<Utc>) -> CurrentStatus {
    match today {
        Some(r) if r.is_clocked_in() => {
            let since = r.check_in;
            let open_since = r
                .activities
                .iter()
                .rev()
                .find(|a| a.kind == ActivityKind::Checkin)
                .map(|a| a.instant)
                .or(since);

            CurrentStatus {
                is_clocked_in: true,
                since: open_since,
                elapsed_seconds: open_since
                    .map(|s| (now - s).num_seconds().max(0))
                    .unwrap_or(0),
            }
        }
        _ => CurrentStatus::default(),
    }
}
