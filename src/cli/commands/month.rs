use crate::cli::commands::week::print_totals;
use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::core::navigate::{View, shift};
use crate::errors::{AppError, AppResult};
use crate::models::MonthSummary;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, color_for_status};
use crate::utils::date::{self, parse_month};
use crate::utils::hours2readable;
use chrono::Datelike;

const CELL: usize = 9;

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Month { month, step } = cmd {
        let employee = ctx.employee()?;

        let mut anchor = match month {
            Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidPeriod(m.clone()))?,
            None => date::first_day_of_month(date::today()),
        };
        if let Some(dir) = step {
            anchor = shift(View::Month, anchor, *dir);
        }

        let records = ctx.load_records(employee).await?;
        print_month(&Core::month(&records, anchor));
    }
    Ok(())
}

fn print_month(m: &MonthSummary) {
    header(format!("{}", m.first_day.format("%B %Y")));

    for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        print!("{:<width$}", name, width = CELL);
    }
    println!();

    for row in m.calendar_rows() {
        for d in row {
            let record = m.records.iter().find(|r| r.date == *d);
            let text = match record {
                Some(r) => format!("{:>2} {:>4.1}h", d.day(), r.total_hours),
                None => format!("{:>2}", d.day()),
            };
            let padded = format!("{:<width$}", text, width = CELL);

            let cell = if d.month() != m.month {
                GREY.paint(padded).to_string()
            } else if let Some(r) = record {
                color_for_status(r.status()).paint(padded).to_string()
            } else {
                padded
            };
            print!("{cell}");
        }
        println!();
    }

    println!();
    print_totals(&m.totals);

    if !m.weeks.is_empty() {
        println!("\nWeeks:");
        for w in &m.weeks {
            println!(
                "  {} → {}  {} over {} day(s), avg {}",
                w.week_start,
                w.week_end,
                hours2readable(w.totals.total_hours),
                w.totals.working_days,
                hours2readable(w.totals.average_daily),
            );
        }
    }
}
