use crate::cli::context::{Context, date_or_today};
use crate::cli::parser::Commands;
use crate::core::calculator::stats::week_range_monday;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::WeeklyStats;
use crate::ui::messages::header;
use crate::utils::mins2readable;

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Stats { date } = cmd {
        let employee = ctx.employee()?;
        let (start, end) = week_range_monday(date_or_today(date)?);

        let dtos = ctx.source.fetch_range(start, end).await?;
        print_stats(&Core::weekly_stats(&dtos, employee, start, end));
    }
    Ok(())
}

fn print_stats(s: &WeeklyStats) {
    header(format!("This week (Mon–Sun) {} → {}", s.start, s.end));

    let (th, tm) = s.total_hm();
    let (ah, am) = s.average_hm();

    println!("Hours worked  : {th}h {tm}m ({})", mins2readable(s.total_minutes, false, true));
    println!("Days worked   : {}", s.days_worked);
    println!("Daily average : {ah}h {am}m");
}
