//! POSIX directory listing leveraging `rustix` primitives.

use super::strategy::DirectorySource;
use rustix::fs::{self as rfs, Dir, Mode, OFlags};
use std::ffi::OsString;
use std::io;
use std::os::unix::ffi::OsStringExt;
use std::path::Path;

/// `openat` + `getdents` backed source.
#[derive(Debug, Default, Clone, Copy)]
pub struct PosixSource;

/// Open directory stream; the descriptor is closed when this is dropped.
pub struct PosixListing {
    dir: Dir,
}

impl Iterator for PosixListing {
    type Item = io::Result<OsString>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.dir.next()?;
        Some(
            entry
                .map(|entry| OsString::from_vec(entry.file_name().to_bytes().to_vec()))
                .map_err(io::Error::from),
        )
    }
}

impl DirectorySource for PosixSource {
    type Listing = PosixListing;

    fn name(&self) -> &'static str {
        "posix"
    }

    fn open(&self, path: &Path) -> io::Result<PosixListing> {
        let dir_fd = rfs::openat(
            rfs::CWD,
            path,
            OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC,
            Mode::empty(),
        )
        .map_err(io::Error::from)?;

        // `Dir` reopens its own descriptor; ours is released on return.
        let dir = Dir::read_from(&dir_fd).map_err(io::Error::from)?;
        Ok(PosixListing { dir })
    }
}
