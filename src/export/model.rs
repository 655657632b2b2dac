// src/export/model.rs

use crate::models::DayRecord;
use serde::Serialize;

/// Flat row of a day record, one per CSV line.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayRecordExport {
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub sessions: usize,
    pub total_hours: f64,
    pub break_hours: f64,
    pub status: String,
}

impl From<&DayRecord> for DayRecordExport {
    fn from(r: &DayRecord) -> Self {
        Self {
            date: r.date_str(),
            check_in: r.check_in.map(|t| t.to_rfc3339()).unwrap_or_default(),
            check_out: r.check_out.map(|t| t.to_rfc3339()).unwrap_or_default(),
            sessions: r.sessions,
            total_hours: (r.total_hours * 100.0).round() / 100.0,
            break_hours: r.break_hours,
            status: r.status().label().to_string(),
        }
    }
}

pub(crate) fn to_rows(records: &[DayRecord]) -> Vec<DayRecordExport> {
    records.iter().map(DayRecordExport::from).collect()
}
