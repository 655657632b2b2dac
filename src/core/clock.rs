use chrono::{DateTime, Local, NaiveDate, Utc};
use std::sync::Mutex;

/// Source of "now" for anything that runs on a timer.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually driven clock.
pub struct FixedClock {
    inner: Mutex<(DateTime<Utc>, NaiveDate)>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self {
            inner: Mutex::new((now, today)),
        }
    }

    /// Today is the UTC date of `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self::new(now, now.date_naive())
    }

    pub fn set(&self, now: DateTime<Utc>) {
        if let Ok(mut g) = self.inner.lock() {
            *g = (now, now.date_naive());
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.inner
            .lock()
            .map(|g| g.0)
            .unwrap_or_else(|p| p.into_inner().0)
    }

    fn today(&self) -> NaiveDate {
        self.inner
            .lock()
            .map(|g| g.1)
            .unwrap_or_else(|p| p.into_inner().1)
    }
}
