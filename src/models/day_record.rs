use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::activity::ActivityEntry;

/// Classification of a day's hours against the daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Overtime,
    Short,
    Complete,
}

impl DayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Overtime => "Overtime",
            DayStatus::Short => "Short",
            DayStatus::Complete => "Complete",
        }
    }
}

/// Merged attendance outcome for one employee on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,  // earliest session start
    pub check_out: Option<DateTime<Utc>>, // last session end, None while clocked in
    pub total_hours: f64,
    pub break_hours: f64,
    pub is_overtime: bool,
    pub is_short_hours: bool,
    pub sessions: usize,
    pub activities: Vec<ActivityEntry>,
}

impl DayRecord {
    /// All-zero record for a date without any session.
    pub fn placeholder(employee_id: i64, date: NaiveDate) -> Self {
        Self {
            employee_id,
            date,
            check_in: None,
            check_out: None,
            total_hours: 0.0,
            break_hours: 0.0,
            is_overtime: false,
            is_short_hours: false,
            sessions: 0,
            activities: Vec::new(),
        }
    }

    pub fn status(&self) -> DayStatus {
        if self.is_overtime {
            DayStatus::Overtime
        } else if self.is_short_hours {
            DayStatus::Short
        } else {
            DayStatus::Complete
        }
    }

    /// True while the most recent session has no check-out.
    pub fn is_clocked_in(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_none()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
