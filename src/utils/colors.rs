//! Terminal colouring for day classifications and optional fields.

use crate::models::DayStatus;
use ansi_term::Colour;

pub const GREY: Colour = Colour::Fixed(8);

/// Overtime → yellow, short → red, complete → green.
pub fn color_for_status(status: DayStatus) -> Colour {
    match status {
        DayStatus::Overtime => Colour::Yellow,
        DayStatus::Short => Colour::Red,
        DayStatus::Complete => Colour::Green,
    }
}

pub fn paint_status(status: DayStatus) -> String {
    color_for_status(status).paint(status.label()).to_string()
}

/// Greys out empty placeholders such as "--:--".
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "00h 00m" {
        GREY.paint(value).to_string()
    } else {
        value.to_string()
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        return GREY.paint(value).to_string();
    }

    if is_in {
        Colour::Green.paint(value).to_string()
    } else {
        Colour::Red.paint(value).to_string()
    }
}
