use crate::core::calculator::normalize::NormalizedSession;
use crate::models::{ActivityEntry, ActivityKind, DayStatus};

pub const DEFAULT_TARGET_HOURS: f64 = 8.0;

/// Classify a day's total against the daily target.
/// Exactly on target is `Complete`.
pub fn classify(total_hours: f64, target_hours: f64) -> DayStatus {
    if total_hours > target_hours {
        DayStatus::Overtime
    } else if total_hours < target_hours {
        DayStatus::Short
    } else {
        DayStatus::Complete
    }
}

/// (is_overtime, is_short_hours)
pub fn flags(total_hours: f64, target_hours: f64) -> (bool, bool) {
    let status = classify(total_hours, target_hours);
    (
        status == DayStatus::Overtime,
        status == DayStatus::Short,
    )
}

/// Timeline of a day, in the order the sessions were merged.
pub fn build_activities(sessions: &[NormalizedSession]) -> Vec<ActivityEntry> {
    let numbered = sessions.len() > 1;
    let mut out = Vec::with_capacity(sessions.len() * 2);

    for (i, s) in sessions.iter().enumerate() {
        let n = i + 1;

        if let Some(at) = s.event.check_in {
            out.push(ActivityEntry {
                kind: ActivityKind::Checkin,
                instant: at,
                label: if numbered {
                    format!("Session {n} started")
                } else {
                    "Started work session".to_string()
                },
            });
        }

        if let Some(at) = s.event.check_out {
            out.push(ActivityEntry {
                kind: ActivityKind::Checkout,
                instant: at,
                label: if numbered {
                    format!("Session {n} ended")
                } else {
                    "Ended work session".to_string()
                },
            });
        }
    }

    out
}
