//! Output formatting for CLI

use crate::models::{FileMetadata, StatError};
use crate::services::format::{format_timestamp, format_timestamp_in, format_with_commas};
use crate::services::mode::format_mode;
use chrono::TimeZone;
use std::io::{self, Write};
use std::path::Path;

/// Writes match lines to `out` and per-entry warnings to `err`
pub struct Reporter<W: Write, E: Write> {
    out: W,
    err: E,
    long_format: bool,
}

impl<W: Write, E: Write> Reporter<W, E> {
    pub fn new(out: W, err: E, long_format: bool) -> Self {
        Self {
            out,
            err,
            long_format,
        }
    }

    #[must_use]
    pub fn long_format(&self) -> bool {
        self.long_format
    }

    /// Emit one match. Falls back to the bare path when metadata is missing.
    pub fn report(&mut self, path: &Path, metadata: Option<&FileMetadata>) -> io::Result<()> {
        match metadata {
            Some(meta) if self.long_format => {
                writeln!(self.out, "{}", format_long_line(path, meta))
            }
            _ => writeln!(self.out, "{}", path.display()),
        }
    }

    pub fn warn(&mut self, err: &StatError) -> io::Result<()> {
        writeln!(self.err, "{err}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

/// Format a long listing line using local time
#[must_use]
pub fn format_long_line(path: &Path, meta: &FileMetadata) -> String {
    render_long_line(path, meta, &format_timestamp(meta.modified))
}

/// Format a long listing line with dates rendered in `tz`
pub fn format_long_line_in<Tz>(path: &Path, meta: &FileMetadata, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    render_long_line(path, meta, &format_timestamp_in(meta.modified, tz))
}

fn render_long_line(path: &Path, meta: &FileMetadata, date: &str) -> String {
    format!(
        "{} {:>4} {:>12} {} {}",
        format_mode(meta.mode),
        meta.link_count,
        format_with_commas(meta.size_bytes),
        date,
        path.display()
    )
}
