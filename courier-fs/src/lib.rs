//! Read-only filesystem helpers for Courier input files, built on `cap-std`
//! and `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, BufReader};

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open a UTF-8 file path for buffered, line-oriented reading.
pub fn open_buffered(path: &Utf8Path) -> io::Result<BufReader<fs_utf8::File>> {
    open_utf8_file(path).map(BufReader::new)
}

/// Resolve the parent directory of `path` and return it with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether a path exists and is a regular file using capability-based
/// IO. A missing path surfaces as an [`io::ErrorKind::NotFound`] error.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use std::io::BufRead;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("temp paths are UTF-8")
    }

    #[rstest]
    fn regular_file_is_detected() {
        let dir = TempDir::new().expect("temp dir");
        let path = utf8(&dir, "map.txt");
        std::fs::write(&path, "Main St\n0\n").expect("write map");
        assert!(file_is_file(&path).expect("metadata"));
    }

    #[rstest]
    fn directory_is_not_a_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = utf8(&dir, "nested");
        std::fs::create_dir(&path).expect("create dir");
        assert!(!file_is_file(&path).expect("metadata"));
    }

    #[rstest]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().expect("temp dir");
        for name in ["absent.txt", "absent/inner.txt"] {
            let err = file_is_file(&utf8(&dir, name)).expect_err("missing path");
            assert_eq!(err.kind(), io::ErrorKind::NotFound);
        }
    }

    #[rstest]
    fn buffered_reader_yields_lines() {
        let dir = TempDir::new().expect("temp dir");
        let path = utf8(&dir, "deliveries.txt");
        std::fs::write(&path, "34.0 -118.0\n34.1 -118.1:tacos\n").expect("write");
        let lines: Vec<String> = open_buffered(&path)
            .expect("open")
            .lines()
            .collect::<Result<_, _>>()
            .expect("read lines");
        assert_eq!(lines, vec!["34.0 -118.0", "34.1 -118.1:tacos"]);
    }
}
