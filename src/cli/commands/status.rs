use crate::cli::context::Context;
use crate::core::calculator::activity::current_status;
use crate::core::reconcile::Reconciler;
use crate::errors::AppResult;
use crate::models::{CurrentStatus, DayRecord};
use crate::ui::messages::{info, success};
use crate::utils::date::today;
use crate::utils::formatting::secs2clock;
use crate::utils::hours2readable;
use crate::utils::time::local_hhmm;
use chrono::Utc;

pub async fn handle(ctx: &Context) -> AppResult<()> {
    let employee = ctx.employee()?;
    let now = Utc::now();

    let record = Reconciler::new(employee, ctx.target_hours)
        .rebuild_today(ctx.source.as_ref(), today(), now)
        .await?;

    print_status(&record, &current_status(Some(&record), now));
    Ok(())
}

pub(crate) fn print_status(record: &DayRecord, status: &CurrentStatus) {
    match status.since {
        Some(since) if status.is_clocked_in => success(format!(
            "Clocked in since {} (elapsed {})",
            local_hhmm(since),
            secs2clock(status.elapsed_seconds)
        )),
        _ => info("Not clocked in."),
    }
    println!(
        "Today: {} over {} session(s)",
        hours2readable(record.total_hours),
        record.sessions
    );
}
