//! Error types for archive extraction operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur during archive extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive file could not be opened for reading.
    #[error("cannot open archive {path}: {source}")]
    ArchiveOpen {
        /// Path of the archive.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Archive is corrupted or not a ZIP archive.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Entry name would resolve outside the destination directory.
    #[error("path traversal detected in entry: {name}")]
    PathTraversal {
        /// The entry name as stored in the archive.
        name: String,
    },

    /// Entry name cannot be mapped to a destination path.
    #[error("invalid entry name {name:?}: {reason}")]
    InvalidEntryName {
        /// The entry name as stored in the archive.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// A directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A destination file could not be opened for writing.
    #[error("failed to open output file {path}: {source}")]
    OutputOpen {
        /// The destination file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Copying entry data to the destination file failed.
    #[error("failed to write {path}: {source}")]
    Copy {
        /// The destination file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ExtractionError {
    /// Returns `true` if this error represents a security violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use unzipr_core::ExtractionError;
    ///
    /// let err = ExtractionError::PathTraversal {
    ///     name: "../etc/passwd".into(),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = ExtractionError::InvalidArchive("bad header".into());
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Returns the filesystem path involved in the failure, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ArchiveOpen { path, .. }
            | Self::DirectoryCreation { path, .. }
            | Self::OutputOpen { path, .. }
            | Self::Copy { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Self::Io(io),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_traversal_error() {
        let err = ExtractionError::PathTraversal {
            name: "../etc/passwd".into(),
        };
        assert!(err.to_string().contains("path traversal"));
        assert!(err.to_string().contains("../etc/passwd"));
        assert!(err.is_security_violation());
        assert!(err.path().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExtractionError = io_err.into();
        assert!(matches!(err, ExtractionError::Io(_)));
        assert!(!err.is_security_violation());
    }

    #[test]
    fn test_output_open_carries_path() {
        let err = ExtractionError::OutputOpen {
            path: PathBuf::from("out/file.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.path(), Some(Path::new("out/file.txt")));
        let display = err.to_string();
        assert!(display.contains("failed to open output file"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: ExtractionError =
            zip::result::ZipError::InvalidArchive("bad central directory".into()).into();
        assert!(matches!(err, ExtractionError::InvalidArchive(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: ExtractionError = zip::result::ZipError::Io(io_err).into();
        assert!(matches!(err, ExtractionError::Io(_)));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = ExtractionError::Copy {
            path: PathBuf::from("file.bin"),
            source: std::io::Error::other("disk full"),
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("disk full"));
    }
}
