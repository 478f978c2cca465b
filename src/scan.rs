//! Locate `Sprouted: M/D/YY` lines and measure their age.

use crate::block::normalize_line_endings;
use crate::date::SproutDate;
use crate::host::Reporter;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

// Year digits are captured loosely so `1/1/2024` is reported instead of
// being read as `1/1/20`.
static SPROUTED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(.*Sprouted: ([0-9]{1,2}/[0-9]{1,2}/[0-9]+).*)$")
        .expect("Invalid sprouted line regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SproutEntry {
    /// The matched line, trimmed.
    pub line: String,
    pub date: SproutDate,
    pub days: u32,
}

impl SproutEntry {
    /// 1-based week of growth: days 0-6 are week 1.
    pub fn week(&self) -> u32 {
        week_of(self.days)
    }
}

pub fn week_of(days: u32) -> u32 {
    days / 7 + 1
}

/// Every valid Sprouted entry in `text`, sorted by line text. Invalid dates
/// are reported and skipped.
pub fn scan_entries(
    text: &str,
    today: NaiveDate,
    reporter: &mut dyn Reporter,
) -> Vec<SproutEntry> {
    let text = normalize_line_endings(text);
    let mut entries = Vec::new();
    for caps in SPROUTED_LINE.captures_iter(&text) {
        let line = caps[1].trim();
        let token = &caps[2];
        match SproutDate::parse(token) {
            Ok(date) => entries.push(SproutEntry {
                line: line.to_string(),
                days: date.days_until(today),
                date,
            }),
            Err(err) => {
                warn!(token, line, "skipping sprouted entry: {err}");
                reporter.warn(&format!("{err} in \"{line}\""));
            }
        }
    }
    entries.sort_by(|a, b| a.line.cmp(&b.line));
    debug!(count = entries.len(), "scanned sprouted entries");
    entries
}
