//! Seams to the application hosting the document.
//!
//! The core never owns a document between calls. A `Host` hands out the
//! current text, tells where a trigger sits, and takes back a full-text
//! replacement. A `Reporter` receives short status messages.

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

pub trait Reporter {
    fn report(&mut self, severity: Severity, message: &str);

    fn info(&mut self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.report(Severity::Warning, message);
    }
}

/// Collects notices in order. Handy for embedding and tests.
impl Reporter for Vec<Notice> {
    fn report(&mut self, severity: Severity, message: &str) {
        self.push(Notice { severity, message: message.to_string() });
    }
}

pub trait Host {
    /// Full text of the active document.
    fn active_text(&mut self) -> Result<String>;

    /// Line index where the triggering block starts.
    fn trigger_line(&self) -> Result<usize>;

    /// Replace the active document with `text` in one write.
    fn persist(&mut self, text: &str) -> Result<()>;
}
