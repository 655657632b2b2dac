// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{last_day_of_month, parse_date, parse_month};
use chrono::NaiveDate;

/// Parse --range (year / month / day / intervallo).
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bad = || AppError::InvalidPeriod(r.to_string());

    let (start_raw, end_raw) = match r.split_once(':') {
        Some((s, e)) => (s.trim(), e.trim()),
        None => (r.trim(), r.trim()),
    };

    if start_raw.len() != end_raw.len() {
        return Err(bad());
    }

    let (start, _) = bounds(start_raw).ok_or_else(bad)?;
    let (_, end) = bounds(end_raw).ok_or_else(bad)?;

    if start > end {
        return Err(bad());
    }
    Ok((start, end))
}

/// First and last day covered by a single period token.
fn bounds(token: &str) -> Option<(NaiveDate, NaiveDate)> {
    match token.len() {
        4 => {
            let y: i32 = token.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let first = parse_month(token)?;
            Some((first, last_day_of_month(first)))
        }
        10 => {
            let d = parse_date(token)?;
            Some((d, d))
        }
        _ => None,
    }
}
