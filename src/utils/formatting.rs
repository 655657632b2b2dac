//! Formatting utilities used for CLI and export outputs.

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // es: +02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: +02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Fractional hours rendered as "07h 30m".
pub fn hours2readable(hours: f64) -> String {
    mins2readable((hours * 60.0).round() as i64, false, false)
}

/// Elapsed seconds rendered as "HH:MM:SS" for the live clock.
pub fn secs2clock(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}
