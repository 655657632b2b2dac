//! Live view: the scheduled tasks behind a visible attendance view.
//!
//! Activating a [`LiveView`] spawns one task owning the day-record
//! collection. It runs two timers:
//! - the reconciliation poll (default 30 s), re-fetching today only
//! - the elapsed-time clock (default 1 s), refreshing the open-session status
//!
//! Both are served from the same loop, so a poll never starts before the
//! previous one has settled. Readers get whole snapshots through a watch
//! channel and keep seeing the last one while a fetch is in flight.
//! Deactivating or dropping the view aborts the task.

use crate::api::AttendanceSource;
use crate::core::clock::Clock;
use crate::core::logic::Core;
use crate::core::reconcile::Reconciler;
use crate::models::{CurrentStatus, DayRecord};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

pub const DEFAULT_POLL_SECS: u64 = 30;
pub const DEFAULT_CLOCK_SECS: u64 = 1;

#[derive(Debug, Clone, Copy)]
pub struct LiveSettings {
    pub poll_every: Duration,
    pub clock_every: Duration,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            poll_every: Duration::from_secs(DEFAULT_POLL_SECS),
            clock_every: Duration::from_secs(DEFAULT_CLOCK_SECS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveSnapshot {
    pub records: Vec<DayRecord>,
    pub status: CurrentStatus,
    pub polls: u64,
}

pub struct LiveView {
    task: Option<JoinHandle<()>>,
    rx: watch::Receiver<LiveSnapshot>,
}

impl LiveView {
    /// Start both timers. Must be called inside a tokio runtime.
    pub fn activate(
        source: Arc<dyn AttendanceSource>,
        clock: Arc<dyn Clock>,
        reconciler: Reconciler,
        initial: Vec<DayRecord>,
        settings: LiveSettings,
    ) -> Self {
        let snapshot = LiveSnapshot {
            status: Core::status(&initial, clock.today(), clock.now()),
            records: initial,
            polls: 0,
        };
        let (tx, rx) = watch::channel(snapshot.clone());

        let task = tokio::spawn(run(
            source,
            clock,
            reconciler,
            snapshot.records,
            settings,
            tx,
        ));

        debug!(?settings, "live view activated");
        Self {
            task: Some(task),
            rx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LiveSnapshot> {
        self.rx.clone()
    }

    pub fn latest(&self) -> LiveSnapshot {
        self.rx.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop both timers and return the last published snapshot.
    pub fn deactivate(mut self) -> LiveSnapshot {
        self.stop();
        self.latest()
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("live view deactivated");
        }
    }
}

impl Drop for LiveView {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run(
    source: Arc<dyn AttendanceSource>,
    clock: Arc<dyn Clock>,
    mut reconciler: Reconciler,
    mut records: Vec<DayRecord>,
    settings: LiveSettings,
    tx: watch::Sender<LiveSnapshot>,
) {
    let start = Instant::now();

    let mut poll = interval_at(start + settings.poll_every, settings.poll_every);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut ticker = interval_at(start + settings.clock_every, settings.clock_every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = poll.tick() => {
                reconciler
                    .tick(source.as_ref(), &mut records, clock.today(), clock.now())
                    .await;
            }
            _ = ticker.tick() => {}
        }

        let snapshot = LiveSnapshot {
            status: Core::status(&records, clock.today(), clock.now()),
            records: records.clone(),
            polls: reconciler.polls(),
        };

        if tx.send(snapshot).is_err() {
            break;
        }
    }
}
