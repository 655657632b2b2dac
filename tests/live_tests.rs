use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use rattendance::api::{AttendanceSource, FileSource, parse_records};
use rattendance::core::clock::{Clock, FixedClock};
use rattendance::core::live::{LiveSettings, LiveSnapshot, LiveView};
use rattendance::core::logic::Core;
use rattendance::core::reconcile::{Reconciler, ReconcilerState, Upsert, upsert_day};
use rattendance::errors::{AppError, AppResult};
use rattendance::models::{AttendanceRecordDto, DayRecord};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod common;
use common::{record, setup_data};

const EMP: i64 = 7;

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid instant")
        .with_timezone(&Utc)
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// In-memory service: `fetch_today` returns whatever is currently stored.
#[derive(Default)]
struct MemorySource {
    records: Mutex<Vec<AttendanceRecordDto>>,
    failing: AtomicBool,
    fetches: AtomicUsize,
}

impl MemorySource {
    fn with(records: Vec<AttendanceRecordDto>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    fn push(&self, dto: AttendanceRecordDto) {
        self.records.lock().expect("lock").push(dto);
    }

    fn all(&self) -> AppResult<Vec<AttendanceRecordDto>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Fetch {
                status: 503,
                body: "unavailable".into(),
            });
        }
        Ok(self.records.lock().expect("lock").clone())
    }
}

#[async_trait]
impl AttendanceSource for MemorySource {
    async fn fetch_today(&self) -> AppResult<Vec<AttendanceRecordDto>> {
        self.all()
    }

    async fn fetch_by_employee(&self, employee_id: i64) -> AppResult<Vec<AttendanceRecordDto>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|r| r.employee == Some(employee_id))
            .collect())
    }

    async fn fetch_range(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Vec<AttendanceRecordDto>> {
        self.all()
    }
}

fn history() -> Vec<DayRecord> {
    let dtos = vec![
        record(1, EMP, "2025-09-01", "2025-09-01T09:00:00Z", "2025-09-01T17:00:00Z"),
        record(2, EMP, "2025-09-02", "2025-09-02T09:00:00Z", "2025-09-02T17:00:00Z"),
    ];
    Core::build_day_records(&dtos, EMP, 8.0, at("2025-09-03T00:00:00Z"))
}

#[test]
fn test_upsert_replaces_in_place_or_prepends() {
    let mut records = history();
    assert_eq!(records[0].date, day("2025-09-02"));

    let mut replacement = DayRecord::placeholder(EMP, day("2025-09-01"));
    replacement.total_hours = 3.0;
    assert_eq!(upsert_day(&mut records, replacement), Upsert::Replaced(1));
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].total_hours, 3.0);

    let fresh = DayRecord::placeholder(EMP, day("2025-09-03"));
    assert_eq!(upsert_day(&mut records, fresh), Upsert::Prepended);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].date, day("2025-09-03"));
}

#[tokio::test]
async fn test_reconciler_prepends_then_replaces_today() {
    let source = MemorySource::with(vec![AttendanceRecordDto::new(3, EMP, "2025-09-03")
        .checked_in("2025-09-03T08:00:00Z")]);
    let mut reconciler = Reconciler::new(EMP, 8.0);
    let mut records = history();
    let today = day("2025-09-03");

    let first = reconciler
        .tick(&source, &mut records, today, at("2025-09-03T10:00:00Z"))
        .await;
    assert_eq!(first, Some(Upsert::Prepended));
    assert_eq!(records.len(), 3);
    assert!((records[0].total_hours - 2.0).abs() < 1e-9);
    assert!(records[0].is_clocked_in());

    // the service now reports the check-out
    source.records.lock().expect("lock")[0].check_out_time =
        Some("2025-09-03T16:30:00Z".to_string());

    let second = reconciler
        .tick(&source, &mut records, today, at("2025-09-03T17:00:00Z"))
        .await;
    assert_eq!(second, Some(Upsert::Replaced(0)));
    assert_eq!(records.len(), 3);
    assert!((records[0].total_hours - 8.5).abs() < 1e-9);
    assert!(records[0].is_overtime);
    assert!(!records[0].is_clocked_in());

    assert_eq!(reconciler.polls(), 2);
    assert_eq!(reconciler.failures(), 0);
    assert_eq!(reconciler.state(), ReconcilerState::IdlePolling);
}

#[tokio::test]
async fn test_reconciler_swallows_fetch_failures() {
    let source = MemorySource::default();
    source.failing.store(true, Ordering::SeqCst);

    let mut reconciler = Reconciler::new(EMP, 8.0);
    let mut records = history();
    let before = records.clone();

    let outcome = reconciler
        .tick(&source, &mut records, day("2025-09-03"), at("2025-09-03T10:00:00Z"))
        .await;

    assert_eq!(outcome, None);
    assert_eq!(records, before);
    assert_eq!(reconciler.failures(), 1);
    assert_eq!(reconciler.state(), ReconcilerState::IdlePolling);

    // next poll recovers
    source.failing.store(false, Ordering::SeqCst);
    let outcome = reconciler
        .tick(&source, &mut records, day("2025-09-03"), at("2025-09-03T10:00:00Z"))
        .await;
    assert_eq!(outcome, Some(Upsert::Prepended));
    assert_eq!(records[0].sessions, 0);
}

#[tokio::test]
async fn test_rebuild_today_ignores_other_days_and_employees() {
    let source = MemorySource::with(vec![
        record(1, EMP, "2025-09-02", "2025-09-02T09:00:00Z", "2025-09-02T17:00:00Z"),
        record(2, 8, "2025-09-03", "2025-09-03T09:00:00Z", "2025-09-03T17:00:00Z"),
        record(3, EMP, "2025-09-03", "2025-09-03T09:00:00Z", "2025-09-03T10:00:00Z"),
    ]);

    let rebuilt = Reconciler::new(EMP, 8.0)
        .rebuild_today(&source, day("2025-09-03"), at("2025-09-03T12:00:00Z"))
        .await
        .expect("rebuild");

    assert_eq!(rebuilt.employee_id, EMP);
    assert_eq!(rebuilt.sessions, 1);
    assert!((rebuilt.total_hours - 1.0).abs() < 1e-9);
}

async fn next_snapshot(rx: &mut tokio::sync::watch::Receiver<LiveSnapshot>) -> LiveSnapshot {
    rx.changed().await.expect("live view still running");
    rx.borrow_and_update().clone()
}

#[tokio::test(start_paused = true)]
async fn test_live_view_polls_and_ticks() {
    let source = Arc::new(MemorySource::with(vec![
        AttendanceRecordDto::new(3, EMP, "2025-09-03").checked_in("2025-09-03T08:00:00Z"),
    ]));
    let clock = Arc::new(FixedClock::at(at("2025-09-03T09:00:00Z")));

    let view = LiveView::activate(
        source.clone(),
        clock.clone(),
        Reconciler::new(EMP, 8.0),
        history(),
        LiveSettings {
            poll_every: Duration::from_secs(30),
            clock_every: Duration::from_secs(1),
        },
    );
    assert!(view.is_active());

    // before the first poll today's record is unknown
    let initial = view.latest();
    assert_eq!(initial.polls, 0);
    assert_eq!(initial.records.len(), 2);
    assert!(!initial.status.is_clocked_in);

    let mut rx = view.subscribe();
    let mut snapshot = initial;
    for _ in 0..60 {
        snapshot = next_snapshot(&mut rx).await;
        if snapshot.polls > 0 {
            break;
        }
    }
    assert_eq!(snapshot.polls, 1);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(snapshot.records.len(), 3);
    assert!(snapshot.status.is_clocked_in);
    assert_eq!(snapshot.status.elapsed_seconds, 3600);

    // the clock timer refreshes elapsed time without fetching
    clock.set(clock.now() + TimeDelta::seconds(5));
    let ticked = next_snapshot(&mut rx).await;
    assert_eq!(ticked.polls, 1);
    assert_eq!(ticked.status.elapsed_seconds, 3605);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

    let last = view.deactivate();
    assert_eq!(last.polls, 1);
}

#[tokio::test(start_paused = true)]
async fn test_live_view_keeps_last_snapshot_on_failure() {
    let source = Arc::new(MemorySource::with(vec![
        AttendanceRecordDto::new(3, EMP, "2025-09-03").checked_in("2025-09-03T08:00:00Z"),
    ]));
    let clock = Arc::new(FixedClock::at(at("2025-09-03T09:00:00Z")));

    let view = LiveView::activate(
        source.clone(),
        clock,
        Reconciler::new(EMP, 8.0),
        history(),
        LiveSettings {
            poll_every: Duration::from_secs(2),
            clock_every: Duration::from_secs(1),
        },
    );
    let mut rx = view.subscribe();

    let mut snapshot = view.latest();
    while snapshot.polls < 1 {
        snapshot = next_snapshot(&mut rx).await;
    }
    assert_eq!(snapshot.records.len(), 3);

    source.failing.store(true, Ordering::SeqCst);
    source.push(record(4, EMP, "2025-09-03", "2025-09-03T06:00:00Z", "2025-09-03T07:00:00Z"));
    while snapshot.polls < 2 {
        snapshot = next_snapshot(&mut rx).await;
    }

    // failed poll: records untouched, view still alive
    assert_eq!(snapshot.records.len(), 3);
    assert_eq!(snapshot.records[0].sessions, 1);
    assert!(view.is_active());

    // dropping the view stops the task and closes the channel
    drop(view);
    while rx.changed().await.is_ok() {}
    assert!(rx.has_changed().is_err());
}

#[tokio::test]
async fn test_file_source_filters() {
    let path = setup_data("file_source_filters");
    let source = FileSource::pinned(&path, day("2025-09-02"));

    let today = source.fetch_today().await.expect("today");
    assert_eq!(today.len(), 2);
    assert!(today.iter().all(|r| r.date.as_deref() == Some("2025-09-02")));

    let mine = source.fetch_by_employee(EMP).await.expect("by employee");
    assert_eq!(mine.len(), 4);

    let range = source
        .fetch_range(day("2025-09-01"), day("2025-09-01"))
        .await
        .expect("range");
    assert_eq!(range.len(), 2);
}

#[test]
fn test_parse_records_skips_malformed_elements() {
    let payload = r#"[
        {"attendance_id": 1, "employee": 7, "date": "2025-09-01",
         "check_in_time": "2025-09-01T09:00:00Z", "check_out_time": null, "status": "Present"},
        42,
        "garbage",
        {"attendance_id": 2, "employee": 7, "date": "2025-09-02", "unknown_field": true}
    ]"#;

    let records = parse_records(payload).expect("array payload");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].check_out_time, None);
    assert_eq!(records[1].check_in_time, None);

    assert!(parse_records("{\"not\": \"an array\"}").is_err());
}
