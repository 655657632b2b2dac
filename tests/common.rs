#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::models::AttendanceRecordDto;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const EMPLOYEE: i64 = 7;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so every run starts from defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

pub fn record(id: i64, employee: i64, date: &str, check_in: &str, check_out: &str) -> AttendanceRecordDto {
    AttendanceRecordDto::new(id, employee, date)
        .checked_in(check_in)
        .checked_out(check_out)
}

/// Three working days in the first week of September 2025 for EMPLOYEE:
/// - Mon 09-01: 09:00–17:30 (overtime)
/// - Tue 09-02: 09:00–12:00 and 13:00–17:00 (short, two sessions)
/// - Wed 09-03: 09:00–17:00 (exactly on target)
///
/// plus another employee's day and records that cannot be used.
pub fn sample_json() -> String {
    let records = vec![
        record(1, EMPLOYEE, "2025-09-01", "2025-09-01T09:00:00Z", "2025-09-01T17:30:00Z"),
        record(2, EMPLOYEE, "2025-09-02", "2025-09-02T13:00:00Z", "2025-09-02T17:00:00Z"),
        record(3, EMPLOYEE, "2025-09-02", "2025-09-02T09:00:00Z", "2025-09-02T12:00:00Z"),
        record(4, EMPLOYEE, "2025-09-03", "2025-09-03T09:00:00Z", "2025-09-03T17:00:00Z"),
        record(5, 8, "2025-09-01", "2025-09-01T09:00:00Z", "2025-09-01T10:00:00Z"),
    ];

    let mut values: Vec<serde_json::Value> = records
        .iter()
        .map(|r| serde_json::to_value(r).expect("serialize record"))
        .collect();
    values.push(serde_json::json!("not a record"));
    values.push(serde_json::json!({ "attendance_id": 99 }));

    serde_json::to_string_pretty(&values).expect("serialize sample")
}

/// Write the sample dataset to a temp file and return its path.
pub fn setup_data(name: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, sample_json()).expect("write sample data");
    path
}
