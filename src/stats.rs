//! The `## Plant Stats` summary kept at the top of a grow log.

use crate::block::{GeneratedBlock, SyncOutcome, Unchanged, sync_block};
use crate::date::{STAMP_FMT, format_mdy, week_span};
use crate::host::Reporter;
use crate::scan::{SproutEntry, scan_entries, week_of};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

pub const STATS_MARKER: &str = "## Plant Stats";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantStats {
    pub max_days: u32,
    pub week: u32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub updated_at: NaiveDateTime,
}

impl PlantStats {
    /// Oldest entry wins; no entries means day 0.
    pub fn from_entries(entries: &[SproutEntry], now: NaiveDateTime) -> Self {
        let max_days = entries.iter().map(|e| e.days).max().unwrap_or(0);
        let (week_start, week_end) = week_span(now.date());
        Self {
            max_days,
            week: week_of(max_days),
            week_start,
            week_end,
            updated_at: now,
        }
    }

    pub fn block(&self) -> GeneratedBlock {
        let stamp = self.updated_at.format(STAMP_FMT);
        GeneratedBlock::new(
            STATS_MARKER,
            vec![
                format!("<sub>Last updated: {stamp}</sub>"),
                format!(
                    "Day {} Week: #{} ({} - {})",
                    self.max_days,
                    self.week,
                    format_mdy(self.week_start),
                    format_mdy(self.week_end)
                ),
            ],
        )
    }
}

/// Rebuild the stats section of `text` as of `now`. Returns the new text
/// when the document changed.
pub fn refresh_stats(
    text: &str,
    now: NaiveDateTime,
    reporter: &mut dyn Reporter,
) -> Option<String> {
    let entries = scan_entries(text, now.date(), reporter);
    if entries.is_empty() {
        reporter.info(
            "No \"Sprouted: {date}\" entries found; reporting day 0.",
        );
    }
    let stats = PlantStats::from_entries(&entries, now);
    debug!(
        max_days = stats.max_days,
        week = stats.week,
        "computed plant stats"
    );

    match sync_block(text, &stats.block()) {
        SyncOutcome::Created(updated) => {
            reporter.info("Plant stats section created.");
            Some(updated)
        }
        SyncOutcome::Updated(updated) => {
            reporter.info("Plant stats section updated.");
            Some(updated)
        }
        SyncOutcome::Unchanged(Unchanged::BlockCurrent) => {
            reporter.info("Plant stats are already up to date.");
            None
        }
        SyncOutcome::Unchanged(Unchanged::DocumentCurrent) => {
            reporter.info(
                "Plant stats are up to date \
                (no effective changes to the file).",
            );
            None
        }
    }
}
