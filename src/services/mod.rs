//! Core services for traversal, matching, metadata inspection and formatting

pub mod format;
pub mod inspect;
pub mod matcher;
pub mod mode;
pub mod traverse;
