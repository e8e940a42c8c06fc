//! Unit tests for the directory listing backends

#[cfg(test)]
mod tests {
    use scantree::services::traverse::portable::PortableSource;
    use scantree::services::traverse::strategy::DirectorySource;
    use std::ffi::OsString;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn list<S: DirectorySource>(source: &S, dir: &Path) -> Vec<OsString> {
        source
            .open(dir)
            .expect("open directory")
            .collect::<Result<Vec<_>, _>>()
            .expect("read entries")
    }

    fn assert_listing(mut names: Vec<OsString>) {
        names.sort();
        let expected: Vec<OsString> = [".", "..", "file.txt", "nested"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn portable_listing_includes_dot_entries_first() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("file.txt"), b"x").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let names = list(&PortableSource, temp_dir.path());
        assert_eq!(names[0], OsString::from("."));
        assert_eq!(names[1], OsString::from(".."));
        assert_listing(names);
    }

    #[cfg(unix)]
    #[test]
    fn posix_listing_matches_portable_listing() {
        use scantree::services::traverse::posix::PosixSource;

        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("file.txt"), b"x").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        assert_listing(list(&PosixSource, temp_dir.path()));
    }

    #[test]
    fn opening_a_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        assert!(PortableSource.open(&missing).is_err());
        assert!(scantree::services::traverse::default_source().open(&missing).is_err());
    }

    #[test]
    fn inspect_reports_size_and_type() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, b"hello world").unwrap();

        let meta = PortableSource.inspect(&file).expect("inspect file");
        assert_eq!(meta.size_bytes, 11);
        assert_eq!(meta.type_char(), '-');
        assert!(!meta.is_directory());
        assert!(meta.link_count >= 1);

        let dir_meta = PortableSource.inspect(temp_dir.path()).expect("inspect dir");
        assert!(dir_meta.is_directory());
        assert_eq!(dir_meta.type_char(), 'd');
    }

    #[test]
    fn inspect_missing_entry_carries_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone.txt");

        let err = PortableSource.inspect(&missing).unwrap_err();
        assert_eq!(err.path, missing.to_string_lossy());
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }
}
