//! Recursive tree walk over a pluggable directory source.
//!
//! Each directory is processed in two phases:
//!
//! - every entry is inspected, matched and reported while the directory
//!   handle is open, and subdirectories are collected into a local list;
//! - the handle is closed, then each collected subdirectory is walked in
//!   listing order.
//!
//! Recursion depth equals tree depth and is bounded only by the call stack.
//! Symbolic links to directories are followed and there is no visited set,
//! so a link cycle recurses until the stack or the open call gives out.

#[cfg(unix)]
pub mod posix;
pub mod portable;
pub mod strategy;

use crate::cli::output::Reporter;
use crate::models::{DirectoryEntry, ErrorItem};
use crate::{Error, Result, ScanConfig};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use strategy::DirectorySource;

#[cfg(unix)]
pub type PlatformSource = posix::PosixSource;
#[cfg(not(unix))]
pub type PlatformSource = portable::PortableSource;

/// Best-fit listing backend for the current platform.
#[must_use]
pub fn default_source() -> PlatformSource {
    PlatformSource::default()
}

/// Counters accumulated over one walk
#[derive(Debug, Default, Clone)]
pub struct WalkStats {
    pub directories: u64,
    pub entries: u64,
    pub matches: u64,
    pub errors: Vec<ErrorItem>,
}

/// Walks a tree, reporting every entry whose bare name matches the pattern.
pub struct TreeWalker<'a, S, W, E>
where
    S: DirectorySource,
    W: Write,
    E: Write,
{
    config: &'a ScanConfig,
    source: S,
    reporter: Reporter<W, E>,
    stats: WalkStats,
}

impl<'a, S, W, E> TreeWalker<'a, S, W, E>
where
    S: DirectorySource,
    W: Write,
    E: Write,
{
    pub fn new(config: &'a ScanConfig, source: S, reporter: Reporter<W, E>) -> Self {
        log::debug!("Using {} directory source", source.name());
        Self {
            config,
            source,
            reporter,
            stats: WalkStats::default(),
        }
    }

    /// Walk `dir` and everything below it.
    ///
    /// Fails with `Error::OpenFailed` for the first directory that cannot be
    /// opened, wherever it sits in the tree. Entries whose metadata cannot be
    /// read produce a warning and are skipped.
    pub fn walk(&mut self, dir: &Path) -> Result<()> {
        log::debug!("scan_tree({})", dir.display());

        let mut listing = self.source.open(dir).map_err(|source| Error::OpenFailed {
            path: dir.to_string_lossy().to_string(),
            source,
        })?;
        self.stats.directories += 1;

        let current_directory = dir.as_os_str() == ".";
        let mut subdirs: Vec<PathBuf> = Vec::new();

        for name_result in listing.by_ref() {
            let name = match name_result {
                Ok(name) => name,
                Err(err) => {
                    log::warn!("Listing {} ended early: {err}", dir.display());
                    break;
                }
            };

            let full_path = if current_directory {
                PathBuf::from(&name)
            } else {
                dir.join(&name)
            };

            if let Some(entry) = self.visit(name, full_path)?
                && entry.should_descend()
            {
                subdirs.push(entry.full_path);
            }
        }

        drop(listing);

        for subdir in subdirs {
            self.walk(&subdir)?;
        }

        Ok(())
    }

    /// Inspect, match and report one entry. `None` when its metadata is unreadable.
    fn visit(&mut self, name: OsString, full_path: PathBuf) -> Result<Option<DirectoryEntry>> {
        self.stats.entries += 1;

        let metadata = match self.source.inspect(&full_path) {
            Ok(meta) => meta,
            Err(err) => {
                log::trace!("{err}");
                self.stats.errors.push(ErrorItem::from(&err));
                self.reporter.warn(&err)?;
                return Ok(None);
            }
        };

        let entry = DirectoryEntry {
            name: name.to_string_lossy().into_owned(),
            full_path,
            is_directory: metadata.is_directory(),
        };

        if self.config.matcher.matches(&entry.name) {
            self.stats.matches += 1;
            self.reporter.report(&entry.full_path, Some(&metadata))?;
        }

        Ok(Some(entry))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.reporter.flush()?;
        Ok(())
    }

    #[must_use]
    pub fn into_stats(self) -> WalkStats {
        self.stats
    }
}
