//! Grow-log helpers for markdown notes.
//!
//! Scans `Sprouted: M/D/YY` lines and keeps a `## Plant Stats` section,
//! inline `Day#N` annotations, and timestamp log lines up to date. The
//! document host is abstracted behind [`host::Host`] and
//! [`host::Reporter`]; the bundled CLI uses files on disk.

pub mod annotate;
pub mod args;
pub mod block;
mod cli;
pub mod config;
pub mod date;
pub mod error;
pub mod formatting;
pub mod host;
pub mod logging;
pub mod note;
pub mod operations;
pub mod scan;
pub mod shared;
pub mod stats;
pub mod timestamp;

pub use block::{GeneratedBlock, SyncOutcome, Unchanged, sync_block};
pub use cli::entry;
pub use date::SproutDate;
pub use error::{Error, Result};
pub use host::{Host, Notice, Reporter, Severity};
