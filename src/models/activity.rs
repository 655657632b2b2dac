use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Checkin,
    Checkout,
    BreakStart,
    BreakEnd,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Checkin => "checkin",
            ActivityKind::Checkout => "checkout",
            ActivityKind::BreakStart => "break_start",
            ActivityKind::BreakEnd => "break_end",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, ActivityKind::Checkin | ActivityKind::BreakEnd)
    }
}

/// One entry of a day's timeline (display only).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub instant: DateTime<Utc>,
    pub label: String,
}

/// Entry of the recent-activity feed, still linked to its source record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub attendance_id: i64,
    pub kind: ActivityKind,
    pub instant: DateTime<Utc>,
    pub description: String,
}
