//! Live reconciler: re-fetches today's sessions and splices the rebuilt
//! record into an existing collection.

use crate::api::AttendanceSource;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::DayRecord;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcilerState {
    IdlePolling,
    Reconciling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// Existing entry at this index was replaced.
    Replaced(usize),
    /// No entry for the date existed; the record went to the front.
    Prepended,
}

/// Replace the entry with the same date at its index, or prepend.
pub fn upsert_day(records: &mut Vec<DayRecord>, record: DayRecord) -> Upsert {
    match records.iter().position(|r| r.date == record.date) {
        Some(idx) => {
            records[idx] = record;
            Upsert::Replaced(idx)
        }
        None => {
            records.insert(0, record);
            Upsert::Prepended
        }
    }
}

pub struct Reconciler {
    employee_id: i64,
    target_hours: f64,
    state: ReconcilerState,
    polls: u64,
    failures: u64,
}

impl Reconciler {
    pub fn new(employee_id: i64, target_hours: f64) -> Self {
        Self {
            employee_id,
            target_hours,
            state: ReconcilerState::IdlePolling,
            polls: 0,
            failures: 0,
        }
    }

    pub fn state(&self) -> ReconcilerState {
        self.state
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Build today's record from a fresh fetch.
    pub async fn rebuild_today(
        &self,
        source: &dyn AttendanceSource,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<DayRecord> {
        let dtos = source.fetch_today().await?;
        Ok(Core::build_day(
            &dtos,
            self.employee_id,
            today,
            self.target_hours,
            now,
        ))
    }

    /// One poll cycle. Fetch failures are logged and leave `records` untouched.
    pub async fn tick(
        &mut self,
        source: &dyn AttendanceSource,
        records: &mut Vec<DayRecord>,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<Upsert> {
        self.state = ReconcilerState::Reconciling;
        self.polls += 1;

        let outcome = match self.rebuild_today(source, today, now).await {
            Ok(record) => {
                let upsert = upsert_day(records, record);
                debug!(?upsert, %today, "reconciled today's record");
                Some(upsert)
            }
            Err(e) => {
                self.failures += 1;
                warn!(error = %e, "background attendance sync failed");
                None
            }
        };

        self.state = ReconcilerState::IdlePolling;
        outcome
    }
}
