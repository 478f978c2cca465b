//! Timestamp lines dropped below a trigger block.

use crate::date::CLOCK_FMT;
use crate::host::Reporter;
use chrono::NaiveTime;
use tracing::debug;

/// Lines between the trigger block's first line and the inserted stamp.
pub const LOG_OFFSET: usize = 2;

pub fn timestamp_line(time: NaiveTime) -> String {
    format!("🪵 Logged at: {}", time.format(CLOCK_FMT))
}

/// Insert `line` so it becomes line `index`. Indices past the end append.
/// The new line reuses the document's line ending.
pub fn insert_line(text: &str, index: usize, line: &str) -> String {
    let eol = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let offset = match index {
        0 => 0,
        n => text
            .match_indices('\n')
            .nth(n - 1)
            .map(|(i, _)| i + 1)
            .unwrap_or(text.len()),
    };

    let mut out = String::with_capacity(text.len() + line.len() + 4);
    out.push_str(&text[..offset]);
    if offset == text.len() && !text.is_empty() && !text.ends_with('\n') {
        out.push_str(eol);
    }
    out.push_str(line);
    out.push_str(eol);
    out.push_str(&text[offset..]);
    out
}

/// Stamp `time` two lines below the trigger at `trigger_line`.
pub fn log_timestamp(
    text: &str,
    trigger_line: usize,
    time: NaiveTime,
    reporter: &mut dyn Reporter,
) -> String {
    let target = trigger_line.saturating_add(LOG_OFFSET);
    let stamp = timestamp_line(time);
    debug!(trigger_line, target, "inserting timestamp");
    reporter.info(&format!("Logged at {}", time.format(CLOCK_FMT)));
    insert_line(text, target, &stamp)
}
