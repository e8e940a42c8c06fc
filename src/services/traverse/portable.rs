//! Portable directory listing using standard library primitives.
//!
//! `read_dir` never reports "." or "..", so they are synthesised up front to
//! keep the listing contract identical to the POSIX backend.

use super::strategy::DirectorySource;
use std::ffi::OsString;
use std::fs::{self, ReadDir};
use std::io;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct PortableSource;

pub struct PortableListing {
    dots: std::array::IntoIter<&'static str, 2>,
    inner: ReadDir,
}

impl Iterator for PortableListing {
    type Item = io::Result<OsString>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(dot) = self.dots.next() {
            return Some(Ok(OsString::from(dot)));
        }

        self.inner
            .next()
            .map(|entry| entry.map(|entry| entry.file_name()))
    }
}

impl DirectorySource for PortableSource {
    type Listing = PortableListing;

    fn name(&self) -> &'static str {
        "portable"
    }

    fn open(&self, path: &Path) -> io::Result<PortableListing> {
        Ok(PortableListing {
            dots: [".", ".."].into_iter(),
            inner: fs::read_dir(path)?,
        })
    }
}
