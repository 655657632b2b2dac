use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_in_out;
use crate::utils::date::{add_days, today};

const LOOKBACK_DAYS: i64 = 7;

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Recent { limit } = cmd {
        let employee = ctx.employee()?;
        let limit = limit.unwrap_or(ctx.cfg.recent_activity_limit);

        let end = today();
        let start = add_days(end, -LOOKBACK_DAYS);
        let dtos = ctx.source.fetch_range(start, end).await?;
        let activities = Core::recent(&dtos, employee, limit);

        header("Recent activity");
        if activities.is_empty() {
            info("No activity in the last seven days.");
            return Ok(());
        }

        for a in activities {
            println!(
                "{}  {}",
                a.instant.format("%Y-%m-%d"),
                colorize_in_out(&a.description, a.kind.is_in())
            );
        }
    }
    Ok(())
}
