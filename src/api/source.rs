use crate::errors::AppResult;
use crate::models::AttendanceRecordDto;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::warn;

/// Read side of the attendance service.
#[async_trait]
pub trait AttendanceSource: Send + Sync {
    /// Today's records (every employee).
    async fn fetch_today(&self) -> AppResult<Vec<AttendanceRecordDto>>;

    async fn fetch_by_employee(&self, employee_id: i64) -> AppResult<Vec<AttendanceRecordDto>>;

    /// Records whose date is in `[start, end]` (every employee).
    async fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<AttendanceRecordDto>>;
}

/// Decode a JSON array element by element, skipping elements that are not
/// record-shaped instead of failing the whole payload.
pub fn parse_records(payload: &str) -> AppResult<Vec<AttendanceRecordDto>> {
    let values: Vec<Value> = serde_json::from_str(payload)?;
    let total = values.len();

    let records: Vec<AttendanceRecordDto> = values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();

    if records.len() != total {
        warn!(
            skipped = total - records.len(),
            "ignored malformed attendance records"
        );
    }

    Ok(records)
}
