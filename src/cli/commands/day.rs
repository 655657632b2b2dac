use crate::cli::context::{Context, date_or_today};
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::core::navigate::{View, shift};
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_in_out, colorize_optional, paint_status};
use crate::utils::date::weekday_short;
use crate::utils::hours2readable;
use crate::utils::time::local_hhmm;
use chrono::{DateTime, Utc};

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Day { date, step } = cmd {
        let employee = ctx.employee()?;

        let mut day = date_or_today(date)?;
        if let Some(dir) = step {
            day = shift(View::Day, day, *dir);
        }

        let records = ctx.load_records(employee).await?;

        match Core::find_day(&records, day) {
            Some(record) => print_day(record, ctx.cfg.show_weekday),
            None => info(format!("No attendance record for {}", day)),
        }
    }
    Ok(())
}

pub(crate) fn hhmm_or_blank(t: Option<DateTime<Utc>>) -> String {
    t.map(local_hhmm).unwrap_or_else(|| "--:--".to_string())
}

fn print_day(record: &DayRecord, show_weekday: bool) {
    if show_weekday {
        header(format!("{} ({})", record.date, weekday_short(record.date)));
    } else {
        header(record.date);
    }

    println!(
        "Check-in: {}   Check-out: {}",
        colorize_in_out(&hhmm_or_blank(record.check_in), true),
        colorize_in_out(&hhmm_or_blank(record.check_out), false),
    );
    println!(
        "Sessions: {} | Worked: {} | Break: {} | Status: {}",
        record.sessions,
        hours2readable(record.total_hours),
        colorize_optional(&hours2readable(record.break_hours)),
        paint_status(record.status()),
    );

    if record.is_clocked_in() {
        println!("Currently clocked in.");
    }

    if !record.activities.is_empty() {
        println!("\nTimeline:");
        for a in &record.activities {
            println!(
                "  {}  {:<9} {}",
                colorize_in_out(&local_hhmm(a.instant), a.kind.is_in()),
                a.kind.as_str(),
                a.label
            );
        }
    }
}
