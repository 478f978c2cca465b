//! Host-driven commands: read the active document, transform, persist.
//!
//! Each call re-reads the document and writes at most once. Any error
//! returned here happened before the write.

use crate::annotate::annotate_days;
use crate::error::Result;
use crate::host::{Host, Reporter};
use crate::scan::{SproutEntry, scan_entries};
use crate::stats::refresh_stats;
use crate::timestamp::log_timestamp;
use chrono::{NaiveDate, NaiveDateTime};

/// Refresh the Plant Stats section. Returns whether the document changed.
pub fn refresh_stats_in(
    host: &mut dyn Host,
    reporter: &mut dyn Reporter,
    now: NaiveDateTime,
) -> Result<bool> {
    let text = host.active_text()?;
    persist_if_changed(host, refresh_stats(&text, now, reporter))
}

/// Append `Day#N` after bare Sprouted dates.
pub fn annotate_in(
    host: &mut dyn Host,
    reporter: &mut dyn Reporter,
    reference: NaiveDate,
) -> Result<bool> {
    let text = host.active_text()?;
    persist_if_changed(host, annotate_days(&text, reference, reporter))
}

/// Insert a timestamp below the host's trigger line.
pub fn log_timestamp_in(
    host: &mut dyn Host,
    reporter: &mut dyn Reporter,
    now: NaiveDateTime,
) -> Result<()> {
    let text = host.active_text()?;
    let trigger = host.trigger_line()?;
    let updated = log_timestamp(&text, trigger, now.time(), reporter);
    host.persist(&updated)
}

/// Sprouted entries of the active document, without modifying it.
pub fn scan_in(
    host: &mut dyn Host,
    reporter: &mut dyn Reporter,
    today: NaiveDate,
) -> Result<Vec<SproutEntry>> {
    let text = host.active_text()?;
    Ok(scan_entries(&text, today, reporter))
}

fn persist_if_changed(
    host: &mut dyn Host,
    updated: Option<String>,
) -> Result<bool> {
    match updated {
        Some(text) => {
            host.persist(&text)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
