use crate::cli::commands::day::hhmm_or_blank;
use crate::cli::context::{Context, date_or_today};
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::core::navigate::{View, shift};
use crate::errors::AppResult;
use crate::models::{DayRecord, PeriodTotals, WeekSummary};
use crate::ui::messages::{header, info};
use crate::utils::colors::paint_status;
use crate::utils::date::weekday_short;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Week { date, step } = cmd {
        let employee = ctx.employee()?;

        let mut anchor = date_or_today(date)?;
        if let Some(dir) = step {
            anchor = shift(View::Week, anchor, *dir);
        }

        let records = ctx.load_records(employee).await?;
        print_week(&Core::week(&records, anchor));
    }
    Ok(())
}

pub(crate) fn print_totals(t: &PeriodTotals) {
    println!(
        "Total: {} | Days: {} | Avg/day: {} | Overtime: {} | Short: {} | Break: {}",
        hours2readable(t.total_hours),
        t.working_days,
        hours2readable(t.average_daily),
        t.overtime_days,
        t.short_hours_days,
        hours2readable(t.total_break_hours),
    );
}

pub(crate) fn records_table(records: &[DayRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Day", 3),
        Column::new("In", 5),
        Column::new("Out", 5),
        Column::new("Worked", 8),
        Column::new("Status", 8),
    ]);

    for r in records {
        table.add_row(vec![
            r.date_str(),
            weekday_short(r.date).to_string(),
            hhmm_or_blank(r.check_in),
            hhmm_or_blank(r.check_out),
            hours2readable(r.total_hours),
            paint_status(r.status()),
        ]);
    }

    table.render()
}

fn print_week(week: &WeekSummary) {
    header(format!("Week {} → {}", week.week_start, week.week_end));

    if week.records.is_empty() {
        info("No attendance records in this week.");
    } else {
        print!("{}", records_table(&week.records));
    }

    println!();
    print_totals(&week.totals);
}
