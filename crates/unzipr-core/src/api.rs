//! High-level public API for archive extraction.

use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::ExtractConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::extraction::Extractor;

/// Extracts an archive to the specified output directory.
///
/// # Arguments
///
/// * `archive_path` - Path to the ZIP archive
/// * `output_dir` - Directory where entries are written (created if absent)
/// * `config` - Extraction configuration
///
/// # Errors
///
/// Returns an error if:
/// - The output directory cannot be created
/// - The archive cannot be opened or is not a ZIP archive
/// - An entry name escapes the output directory
/// - A file cannot be created or written
///
/// # Examples
///
/// ```no_run
/// use unzipr_core::ExtractConfig;
/// use unzipr_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_archive("archive.zip", "/tmp/output", &ExtractConfig::default())?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    config: &ExtractConfig,
) -> Result<ExtractionReport> {
    Extractor::new(config.clone()).extract(archive_path.as_ref(), output_dir.as_ref())
}

/// Returns the absolute parent directory of `archive_path`.
///
/// This is where the command-line tool extracts to. The path is made
/// absolute against the current directory without resolving symlinks.
///
/// # Errors
///
/// Returns an error if the path is empty, the current directory cannot be
/// read, or the path has no parent.
///
/// # Examples
///
/// ```
/// use unzipr_core::default_destination;
///
/// let dest = default_destination("some/dir/archive.zip").unwrap();
/// assert!(dest.is_absolute());
/// assert!(dest.ends_with("some/dir"));
/// ```
pub fn default_destination<P: AsRef<Path>>(archive_path: P) -> Result<PathBuf> {
    let archive_path = archive_path.as_ref();
    let absolute = std::path::absolute(archive_path)?;

    absolute.parent().map(Path::to_path_buf).ok_or_else(|| {
        ExtractionError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "archive path has no parent directory: {}",
                archive_path.display()
            ),
        ))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_utils::ZipTestBuilder;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_destination_relative() {
        let dest = default_destination("archive.zip").unwrap();
        assert_eq!(dest, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_default_destination_absolute() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let archive = temp.path().join("nested").join("archive.zip");
        assert_eq!(
            default_destination(&archive).unwrap(),
            temp.path().join("nested")
        );
    }

    #[test]
    fn test_default_destination_empty_path() {
        assert!(default_destination("").is_err());
    }

    #[test]
    fn test_extract_archive_roundtrip() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let archive = temp.path().join("archive.zip");
        ZipTestBuilder::new()
            .add_file("readme.txt", b"hello")
            .write_to(&archive);

        let out = temp.path().join("out");
        let report = extract_archive(&archive, &out, &ExtractConfig::default()).unwrap();

        assert_eq!(report.files_extracted, 1);
        assert_eq!(fs::read_to_string(out.join("readme.txt")).unwrap(), "hello");
    }
}
