//! Directory Tree Scanner Library
//!
//! This library recursively walks a directory tree, matches entry names
//! against a case-insensitive regular expression and reports matches either
//! as bare paths or as an `ls -l` style listing (permissions, link count,
//! size, modification time, path).

pub mod cli;
pub mod models;
pub mod services;

pub use models::{DirectoryEntry, ErrorItem, FileMetadata, StatError};
pub use services::matcher::Matcher;
pub use services::traverse::TreeWalker;

use cli::output::Reporter;
use std::io::Write;
use std::path::Path;
use std::result;

/// Custom error type for the library
///
/// `OpenFailed` is terminating: any directory that cannot be opened aborts
/// the whole scan. Per-entry metadata failures are reported through
/// [`StatError`] instead and never surface here.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    InvalidPattern(String),
    OpenFailed {
        path: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => f.write_str(msg),
            Error::InvalidPattern(msg) => write!(f, "Bad data pattern : {msg}"),
            Error::OpenFailed { path, source } => {
                write!(f, "opendir failed for \"{path}\": {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) | Error::OpenFailed { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Immutable scan configuration, built once before the walk starts
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub matcher: Matcher,
    pub long_format: bool,
    pub debug: bool,
}

impl ScanConfig {
    /// Compile `pattern` and build a configuration around it.
    pub fn new(pattern: &str, long_format: bool) -> Result<Self> {
        Ok(Self {
            matcher: Matcher::new(pattern)?,
            long_format,
            debug: false,
        })
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Summary result from a scan operation
#[derive(Debug)]
pub struct ScanSummary {
    pub root: String,
    pub directories: u64,
    pub entries: u64,
    pub matches: u64,
    pub errors: Vec<ErrorItem>,
    pub started_at: std::time::SystemTime,
    pub finished_at: std::time::SystemTime,
}

/// Scan a directory tree, writing matches to `out` and warnings to `err`
///
/// # Arguments
/// * `root` - The directory to start from; "." suppresses the path prefix
/// * `config` - Pattern and output options
/// * `out` - Receives one line per match
/// * `err` - Receives one warning line per entry whose metadata could not be read
///
/// # Returns
/// A `ScanSummary` with counters and the recoverable errors met on the way.
/// Fails with `Error::OpenFailed` as soon as any directory cannot be opened;
/// lines already written to `out` stay written.
pub fn scan_tree<P, W, E>(root: P, config: &ScanConfig, out: W, err: E) -> Result<ScanSummary>
where
    P: AsRef<Path>,
    W: Write,
    E: Write,
{
    let root = root.as_ref();
    let started_at = std::time::SystemTime::now();

    let reporter = Reporter::new(out, err, config.long_format);
    let mut walker = TreeWalker::new(config, services::traverse::default_source(), reporter);
    walker.walk(root)?;
    walker.flush()?;

    let stats = walker.into_stats();

    Ok(ScanSummary {
        root: root.to_string_lossy().to_string(),
        directories: stats.directories,
        entries: stats.entries,
        matches: stats.matches,
        errors: stats.errors,
        started_at,
        finished_at: std::time::SystemTime::now(),
    })
}
