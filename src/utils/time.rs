//! Time utilities: instant parsing, target-duration parsing, hour conversions.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A daily target cannot exceed one day.
pub const MAX_TARGET_MINUTES: i64 = 24 * 60;

/// Parse an ISO-8601 instant. Offsets are honoured; naive values are read as UTC.
/// Returns `None` for anything unparseable.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn hours(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Duration between two instants, never negative.
pub fn clamped_between(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeDelta {
    (end - start).max(TimeDelta::zero())
}

/// Parse a duration like "8h", "7h30m", "450m" or "7.5" (hours) into minutes.
/// Anything above [`MAX_TARGET_MINUTES`] is rejected.
pub fn parse_duration_minutes(s: &str) -> AppResult<i64> {
    let t = s.trim().to_ascii_lowercase();
    let err = || AppError::InvalidDuration(s.to_string());

    if t.is_empty() {
        return Err(err());
    }

    if let Ok(h) = t.parse::<f64>() {
        if h < 0.0 || !h.is_finite() || h * 60.0 > MAX_TARGET_MINUTES as f64 {
            return Err(err());
        }
        return Ok((h * 60.0).round() as i64);
    }

    let mut minutes = 0i64;
    let mut num = String::new();
    let mut seen_unit = false;

    for c in t.chars() {
        match c {
            '0'..='9' => num.push(c),
            'h' | 'm' => {
                let n: i64 = num.parse().map_err(|_| err())?;
                let part = if c == 'h' { n.checked_mul(60) } else { Some(n) };
                minutes = part
                    .and_then(|m| minutes.checked_add(m))
                    .filter(|m| *m <= MAX_TARGET_MINUTES)
                    .ok_or_else(err)?;
                num.clear();
                seen_unit = true;
            }
            ' ' => {}
            _ => return Err(err()),
        }
    }

    if !num.is_empty() || !seen_unit {
        return Err(err());
    }

    Ok(minutes)
}

/// Wall-clock "HH:MM" of an instant in the local timezone.
pub fn local_hhmm(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%H:%M").to_string()
}
