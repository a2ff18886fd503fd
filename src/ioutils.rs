use std::path::Path;

use crate::error::{Error, Result};

/// Creates `dest_path` and any missing parents. Existing directories are fine.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parents and replacing any existing file.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Recursively removes `dest_path` and everything below it.
pub fn remove_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::remove_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_file_creates_parents_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b").join("file.txt");

        write_file("first", &target).unwrap();
        write_file("second", &target).unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("x").join("y");
        create_dir_all(&dir).unwrap();
        create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn read_from_reads_everything() {
        let input = std::io::Cursor::new(r#"{"author": "Barney"}"#);
        assert_eq!(read_from(input).unwrap(), r#"{"author": "Barney"}"#);
    }
}
