//! `M/D/YY` date tokens and the day arithmetic built on them.

use crate::error::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

pub const STAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";
pub const CLOCK_FMT: &str = "%H:%M:%S";

/// A germination date parsed from a `Sprouted: M/D/YY` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SproutDate(NaiveDate);

impl SproutDate {
    /// Parse an `M/D/YY` token. The year is always `20YY`.
    ///
    /// Rejects tokens without exactly three parts, years that are not two
    /// digits, and calendar dates that do not exist (`2/30/24`).
    pub fn parse(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split('/').collect();
        if parts.len() != 3 {
            return Err(Error::invalid_date(token, "expected M/D/YY"));
        }
        if parts[2].len() != 2 {
            return Err(Error::invalid_date(token, "year must have two digits"));
        }
        let month = parse_part(token, parts[0])?;
        let day = parse_part(token, parts[1])?;
        let year = parse_part(token, parts[2])? as i32 + 2000;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(SproutDate)
            .ok_or_else(|| Error::invalid_date(token, "no such calendar date"))
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        SproutDate(date)
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// `M/D/YY` without zero padding on month or day.
    pub fn format_mdy(self) -> String {
        format_mdy(self.0)
    }

    /// Whole days between this date and `reference`, in either direction.
    pub fn days_until(self, reference: NaiveDate) -> u32 {
        days_between(self.0, reference)
    }
}

impl fmt::Display for SproutDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_mdy())
    }
}

fn parse_part(token: &str, part: &str) -> Result<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_date(token, "date parts must be numbers"));
    }
    part.parse()
        .map_err(|_| Error::invalid_date(token, "date part out of range"))
}

pub fn format_mdy(date: NaiveDate) -> String {
    let yy = date.year().rem_euclid(100);
    format!("{}/{}/{yy:02}", date.month(), date.day())
}

/// Absolute distance in whole days. Both sides are plain calendar dates, so
/// the result matches a UTC-midnight difference regardless of local DST.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> u32 {
    a.signed_duration_since(b).num_days().unsigned_abs() as u32
}

/// Sunday through Saturday of the week containing `today`.
pub fn week_span(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = i64::from(today.weekday().num_days_from_sunday());
    let start = today - Duration::days(back);
    (start, start + Duration::days(6))
}
