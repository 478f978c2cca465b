//! Inline `Day#N` annotations after Sprouted dates.
//!
//! Matching runs once over the untouched source and yields a list of
//! edits; the edits are then applied in one left-to-right pass. Tokens that
//! already carry a ` Day#<digits>` suffix are left alone.

use crate::date::SproutDate;
use crate::host::Reporter;
use chrono::NaiveDate;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::{debug, warn};

static SPROUTED_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Sprouted: ([0-9]{1,2}/[0-9]{1,2}/[0-9]+)")
        .expect("Invalid sprouted token regex")
});

static DAY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ Day#[0-9]+").expect("Invalid day suffix regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub span: Range<usize>,
    pub replacement: String,
}

/// Edits needed to annotate every bare Sprouted token in `text`.
pub fn plan_annotations(
    text: &str,
    reference: NaiveDate,
    reporter: &mut dyn Reporter,
) -> Vec<Annotation> {
    let mut plan = Vec::new();
    for caps in SPROUTED_TOKEN.captures_iter(text) {
        let (Some(whole), Some(token)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if DAY_SUFFIX.is_match(&text[whole.end()..]) {
            continue;
        }
        match SproutDate::parse(token.as_str()) {
            Ok(date) => {
                let days = date.days_until(reference);
                plan.push(Annotation {
                    span: whole.range(),
                    replacement: format!("{} Day#{days}", whole.as_str()),
                });
            }
            Err(err) => {
                warn!(token = token.as_str(), "skipping sprouted token: {err}");
                reporter.warn(&err.to_string());
            }
        }
    }
    plan
}

/// Apply non-overlapping, position-ordered edits to `text`.
pub fn apply_annotations(text: &str, plan: &[Annotation]) -> String {
    let extra: usize = plan.iter().map(|a| a.replacement.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;
    for edit in plan {
        out.push_str(&text[cursor..edit.span.start]);
        out.push_str(&edit.replacement);
        cursor = edit.span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Annotate `text` against `reference`. Returns the new text when at least
/// one token was annotated.
pub fn annotate_days(
    text: &str,
    reference: NaiveDate,
    reporter: &mut dyn Reporter,
) -> Option<String> {
    let plan = plan_annotations(text, reference, reporter);
    if plan.is_empty() {
        reporter.info("Nothing to annotate.");
        return None;
    }
    debug!(count = plan.len(), "annotating sprouted tokens");
    reporter.info(&format!("Annotated {} Sprouted date(s).", plan.len()));
    Some(apply_annotations(text, &plan))
}
