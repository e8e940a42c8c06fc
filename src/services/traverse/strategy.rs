//! Source trait for directory listing backends.

use crate::models::{FileMetadata, StatError};
use std::ffi::OsString;
use std::io;
use std::path::Path;

/// Common interface implemented by directory listing backends.
///
/// A listing owns the open directory handle; dropping it closes the handle.
pub trait DirectorySource {
    type Listing: Iterator<Item = io::Result<OsString>>;

    /// Identify the backend for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Open `path` for listing. Yields bare entry names, "." and ".." included.
    fn open(&self, path: &Path) -> io::Result<Self::Listing>;

    /// Query metadata for one entry.
    fn inspect(&self, path: &Path) -> Result<FileMetadata, StatError> {
        crate::services::inspect::inspect(path)
    }
}
