//! User-facing terminal messages. Diagnostics go through `tracing` instead.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tag(colour: Colour, icon: &str) -> String {
    Style::new().fg(colour).bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, ICON_ERR), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        Style::new()
            .fg(Colour::Blue)
            .bold()
            .paint(format!("====================== {msg}"))
    );
}

/// Shown instead of a summary when no employee profile can be resolved.
pub fn missing_profile_guidance() {
    warning("No employee profile is configured, so there is no attendance to show.");
    println!("   Set `employee_id` in the configuration file or pass --employee <ID>.");
}
