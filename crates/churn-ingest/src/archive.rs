//! Zip archive extraction.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use zip::ZipArchive;

use crate::error::Result;

/// Extract every file entry of a zip archive into `dest_dir`.
///
/// Existing files are overwritten, so re-running after a previous download is
/// idempotent at the filesystem level. Entries whose names escape the
/// destination directory are skipped. Returns the number of files written.
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> Result<usize> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;
    fs::create_dir_all(dest_dir)?;

    let mut extracted = 0usize;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let Some(relative) = entry.enclosed_name() else {
            warn!(name = entry.name(), "skipping archive entry with unsafe path");
            continue;
        };
        let target = dest_dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
        debug!(path = %target.display(), "extracted archive entry");
        extracted += 1;
    }

    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::AcquireError;

    fn write_test_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (name, contents) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(contents.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn extracts_all_file_entries() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("data.zip");
        write_test_zip(&archive, &[("a.csv", "x,y\n1,2\n"), ("notes.txt", "hi")]);

        let count = extract_archive(&archive, dir.path()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read_to_string(dir.path().join("a.csv")).unwrap(), "x,y\n1,2\n");
        assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "hi");
    }

    #[test]
    fn extraction_overwrites_prior_files() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("data.zip");
        write_test_zip(&archive, &[("a.csv", "fresh\n")]);
        fs::write(dir.path().join("a.csv"), "stale contents").unwrap();

        extract_archive(&archive, dir.path()).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a.csv")).unwrap(), "fresh\n");
    }

    #[test]
    fn a_corrupt_archive_keeps_the_zip_error_as_source() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("bad.zip");
        fs::write(&archive, "not a zip archive").unwrap();

        let error = extract_archive(&archive, dir.path()).unwrap_err();

        assert!(matches!(error, AcquireError::Archive(_)));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn empty_archive_extracts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("empty.zip");
        write_test_zip(&archive, &[]);

        let count = extract_archive(&archive, dir.path()).unwrap();

        assert_eq!(count, 0);
    }
}
