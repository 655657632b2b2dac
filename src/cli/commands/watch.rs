use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::clock::SystemClock;
use crate::core::live::{LiveSettings, LiveSnapshot, LiveView};
use crate::core::logic::Core;
use crate::core::reconcile::{Reconciler, upsert_day};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::today;
use crate::utils::formatting::secs2clock;
use crate::utils::hours2readable;
use chrono::{Local, Utc};
use std::sync::Arc;
use std::time::Duration;

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Watch { ticks } = cmd {
        let employee = ctx.employee()?;
        let reconciler = Reconciler::new(employee, ctx.target_hours);

        // Initial load: a failure here is reported to the user.
        let mut records = ctx.load_records(employee).await?;
        let todays = reconciler
            .rebuild_today(ctx.source.as_ref(), today(), Utc::now())
            .await?;
        upsert_day(&mut records, todays);

        let settings = LiveSettings {
            poll_every: Duration::from_secs(ctx.cfg.poll_interval_secs.max(1)),
            clock_every: Duration::from_secs(ctx.cfg.clock_interval_secs.max(1)),
        };

        header(format!(
            "Live attendance (poll every {}s, Ctrl-C to stop)",
            settings.poll_every.as_secs()
        ));

        let view = LiveView::activate(
            ctx.source.clone(),
            Arc::new(SystemClock),
            reconciler,
            records,
            settings,
        );
        let mut rx = view.subscribe();
        print_snapshot(&rx.borrow().clone());

        // single handler for the whole session
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut seen = 0u64;
        loop {
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = rx.borrow_and_update().clone();
                    print_snapshot(&snapshot);

                    seen += 1;
                    if ticks.is_some_and(|max| seen >= max) {
                        break;
                    }
                }
                _ = &mut ctrl_c => break,
            }
        }

        let last = view.deactivate();
        info(format!("Stopped after {} poll(s).", last.polls));
    }
    Ok(())
}

fn print_snapshot(s: &LiveSnapshot) {
    let worked = Core::find_day(&s.records, today())
        .map(|r| hours2readable(r.total_hours))
        .unwrap_or_else(|| hours2readable(0.0));

    let clock = if s.status.is_clocked_in {
        format!("clocked in {}", secs2clock(s.status.elapsed_seconds))
    } else {
        "not clocked in".to_string()
    };

    println!(
        "[{}] today {} | {} | polls {}",
        Local::now().format("%H:%M:%S"),
        worked,
        clock,
        s.polls
    );
}
