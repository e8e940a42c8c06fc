//! Data models for directory entries, file metadata, and errors

use std::path::PathBuf;
use std::time::SystemTime;

/// One name returned while listing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub full_path: PathBuf,
    pub is_directory: bool,
}

impl DirectoryEntry {
    /// "." and ".." are reported like any other entry but never descended into.
    #[must_use]
    pub fn is_self_or_parent(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    #[must_use]
    pub fn should_descend(&self) -> bool {
        self.is_directory && !self.is_self_or_parent()
    }
}

/// Metadata gathered for a single entry, consumed once by the reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Raw `st_mode` bits: file type nibble, special bits, permission groups
    pub mode: u16,
    pub link_count: u64,
    pub size_bytes: u64,
    pub modified: SystemTime,
}

impl FileMetadata {
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.mode & crate::services::mode::S_IFMT == crate::services::mode::S_IFDIR
    }

    #[must_use]
    pub fn type_char(&self) -> char {
        crate::services::mode::type_char(self.mode)
    }

    #[must_use]
    pub fn permission_triplets(&self) -> [String; 3] {
        crate::services::mode::permission_triplets(self.mode)
    }
}

/// Recoverable failure to query metadata for one entry
#[derive(Debug)]
pub struct StatError {
    pub path: String,
    pub source: std::io::Error,
}

impl StatError {
    pub fn new(path: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for StatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stat() failed for \"{}\": {}", self.path, self.source)
    }
}

impl std::error::Error for StatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Represents an error encountered during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorItem {
    pub path: String,
    pub code: String,
    pub message: String,
}

impl From<&StatError> for ErrorItem {
    fn from(err: &StatError) -> Self {
        let code = match err.source.kind() {
            std::io::ErrorKind::NotFound => "ENOENT",
            std::io::ErrorKind::PermissionDenied => "EACCES",
            _ => "IO",
        };

        Self {
            path: err.path.clone(),
            code: code.to_string(),
            message: err.source.to_string(),
        }
    }
}
