//! Metadata inspection for a single path, with platform-specific mode sources

use crate::models::{FileMetadata, StatError};
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Query type, permissions, link count, size and mtime for `path`.
///
/// Symbolic links are followed, so a dangling link fails here.
pub fn inspect(path: &Path) -> Result<FileMetadata, StatError> {
    let metadata = std::fs::metadata(path)
        .map_err(|err| StatError::new(path.to_string_lossy(), err))?;

    let meta = FileMetadata {
        mode: mode_bits(&metadata),
        link_count: link_count(&metadata),
        size_bytes: metadata.len(),
        modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
    };
    log::trace!("Inspected {}: mode {:o}", path.display(), meta.mode);
    Ok(meta)
}

/// Mode bits straight from `st_mode` (Unix platform)
#[cfg(unix)]
#[must_use]
pub fn mode_bits(metadata: &Metadata) -> u16 {
    // st_mode only carries 16 meaningful bits
    (metadata.mode() & 0xFFFF) as u16
}

/// Synthesised mode bits (non-Unix fallback)
#[cfg(not(unix))]
#[must_use]
pub fn mode_bits(metadata: &Metadata) -> u16 {
    use crate::services::mode::{S_IFDIR, S_IFLNK, S_IFREG};

    let file_type = metadata.file_type();
    if file_type.is_dir() {
        S_IFDIR | 0o755
    } else if file_type.is_symlink() {
        S_IFLNK | 0o777
    } else if metadata.permissions().readonly() {
        S_IFREG | 0o444
    } else {
        S_IFREG | 0o644
    }
}

#[cfg(unix)]
#[must_use]
pub fn link_count(metadata: &Metadata) -> u64 {
    metadata.nlink()
}

#[cfg(not(unix))]
#[must_use]
pub fn link_count(_metadata: &Metadata) -> u64 {
    1
}
