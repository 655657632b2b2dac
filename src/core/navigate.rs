use crate::utils::date::{add_days, add_months};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Prev,
    Next,
}

/// Move the selected date one step of the given view.
/// Month steps clamp the day (Jan 31 → Feb 28/29).
pub fn shift(view: View, selected: NaiveDate, dir: Direction) -> NaiveDate {
    let sign = match dir {
        Direction::Prev => -1,
        Direction::Next => 1,
    };

    match view {
        View::Day => add_days(selected, sign),
        View::Week => add_days(selected, 7 * sign),
        View::Month => add_months(selected, sign as i32),
    }
}
