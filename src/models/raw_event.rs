use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Record as delivered by the attendance service.
///
/// Every field is optional: the payload is only trusted after it has been
/// narrowed into a [`RawAttendanceEvent`] by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceRecordDto {
    pub attendance_id: Option<i64>,
    pub employee: Option<i64>,
    pub date: Option<String>,           // "YYYY-MM-DD"
    pub check_in_time: Option<String>,  // ISO-8601 or null
    pub check_out_time: Option<String>, // ISO-8601 or null
    pub status: Option<String>,
}

impl AttendanceRecordDto {
    /// Builder used by fixtures and tests.
    pub fn new(id: i64, employee: i64, date: &str) -> Self {
        Self {
            attendance_id: Some(id),
            employee: Some(employee),
            date: Some(date.to_string()),
            check_in_time: None,
            check_out_time: None,
            status: Some("Present".to_string()),
        }
    }

    pub fn checked_in(mut self, at: &str) -> Self {
        self.check_in_time = Some(at.to_string());
        self
    }

    pub fn checked_out(mut self, at: &str) -> Self {
        self.check_out_time = Some(at.to_string());
        self
    }
}

/// One session (check-in/check-out pair) with strictly typed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawAttendanceEvent {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: String,
}
