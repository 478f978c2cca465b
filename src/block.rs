//! Generated-block synchronization.
//!
//! A generated block is a short run of lines whose first line starts with a
//! header marker (for example `## Plant Stats`). Synchronizing a document
//! leaves exactly one such block in it: an existing block is replaced where
//! it stands, otherwise the block is prepended followed by a blank line.
//!
//! The extent of an existing block is bounded: it never runs past the next
//! `## ` heading or the end of the document, and never covers more lines
//! than the replacement block has. A stale block that is longer than its
//! replacement and not followed by a heading keeps its trailing lines.

use tracing::debug;

/// Any second-level markdown heading. Terminates the old block's extent.
pub const SECTION_MARKER: &str = "## ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBlock {
    marker: String,
    lines: Vec<String>,
}

impl GeneratedBlock {
    /// Build a block from its body lines. The marker becomes the first line.
    pub fn new(marker: impl Into<String>, body: Vec<String>) -> Self {
        let marker = marker.into();
        let mut lines = Vec::with_capacity(body.len() + 1);
        lines.push(marker.clone());
        lines.extend(body);
        Self { marker, lines }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unchanged {
    /// The block found in the document already matches, line for line.
    BlockCurrent,
    /// Splicing produced the same document after newline normalization.
    DocumentCurrent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Created(String),
    Updated(String),
    Unchanged(Unchanged),
}

impl SyncOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            SyncOutcome::Created(t) | SyncOutcome::Updated(t) => Some(t),
            SyncOutcome::Unchanged(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            SyncOutcome::Created(t) | SyncOutcome::Updated(t) => Some(t),
            SyncOutcome::Unchanged(_) => None,
        }
    }
}

/// Replace or prepend `block` in `document`.
pub fn sync_block(document: &str, block: &GeneratedBlock) -> SyncOutcome {
    let normalized = normalize_line_endings(document);
    let mut lines: Vec<&str> = normalized.split('\n').collect();
    let new_lines: Vec<&str> =
        block.lines().iter().map(String::as_str).collect();

    let start = lines.iter().position(|l| l.starts_with(block.marker()));
    let created = match start {
        Some(start) => {
            let end = block_end(&lines, start, new_lines.len());
            debug!(start, end, marker = block.marker(), "found existing block");
            if lines[start..end].join("\n") == block.text() {
                return SyncOutcome::Unchanged(Unchanged::BlockCurrent);
            }
            lines.splice(start..end, new_lines);
            false
        }
        None => {
            debug!(marker = block.marker(), "no existing block; prepending");
            let mut head = new_lines;
            head.push("");
            lines.splice(0..0, head);
            true
        }
    };

    let updated = normalize_trailing(lines.join("\n"));
    if updated == normalize_trailing(normalized.clone()) {
        return SyncOutcome::Unchanged(Unchanged::DocumentCurrent);
    }
    if created {
        SyncOutcome::Created(updated)
    } else {
        SyncOutcome::Updated(updated)
    }
}

/// Index one past the last line of the block starting at `start`.
fn block_end(lines: &[&str], start: usize, max_len: usize) -> usize {
    let mut end = start + 1;
    let mut taken = 1;
    while end < lines.len()
        && !lines[end].starts_with(SECTION_MARKER)
        && taken < max_len
    {
        end += 1;
        taken += 1;
    }
    end
}

pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Non-empty text ends with exactly one newline; any trailing whitespace
/// run before it collapses.
pub fn normalize_trailing(mut text: String) -> String {
    if text.is_empty() {
        return text;
    }
    if !text.ends_with('\n') {
        text.push('\n');
    }
    let kept = text.trim_end().len();
    text.truncate(kept);
    text.push('\n');
    text
}
