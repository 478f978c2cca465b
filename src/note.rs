//! Markdown files on disk acting as the active document.

use crate::error::{Error, Result};
use crate::host::Host;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// File-backed host. `path` and `trigger` stay optional so a missing
/// document or trigger surfaces the same way an editor host would.
#[derive(Debug, Default)]
pub struct NoteFile {
    pub path: Option<PathBuf>,
    pub trigger: Option<usize>,
    pub dry_run: bool,
}

impl NoteFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path, ..Default::default() }
    }

    fn require_path(&self) -> Result<&Path> {
        self.path
            .as_deref()
            .ok_or(Error::HostContextMissing("an active note file"))
    }
}

impl Host for NoteFile {
    fn active_text(&mut self) -> Result<String> {
        let path = self.require_path()?;
        if !path.is_file() {
            return Err(Error::HostContextMissing("an existing note file"));
        }
        Ok(fs::read_to_string(path)?)
    }

    fn trigger_line(&self) -> Result<usize> {
        self.trigger.ok_or(Error::HostContextMissing("a trigger line (--line)"))
    }

    fn persist(&mut self, text: &str) -> Result<()> {
        if self.dry_run {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
            return Ok(());
        }
        let path = self.require_path()?;
        write_atomic(path, text)?;
        info!(path = %path.display(), bytes = text.len(), "wrote note");
        Ok(())
    }
}

/// Write through a sibling temp file and rename it over `path`.
pub fn write_atomic(path: &Path, text: &str) -> io::Result<()> {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| io::Error::other("note path has no file name"))?;
    let tmp = path.with_file_name(format!(".{name}.sprout-tmp"));
    let written =
        fs::write(&tmp, text).and_then(|()| fs::rename(&tmp, path));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}
