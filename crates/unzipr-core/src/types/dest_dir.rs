//! Destination directory for an extraction run.

use crate::ExtractionError;
use crate::Result;
use crate::fs::ensure_dir_all;
use std::path::Path;
use std::path::PathBuf;

use super::EntryPath;

/// The root directory every entry is written under.
///
/// Construction creates the directory together with any missing ancestors
/// and canonicalizes it, so a `DestDir` is always an existing absolute
/// directory.
///
/// # Examples
///
/// ```no_run
/// use unzipr_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::create("/tmp/extraction/nested")?;
/// println!("Extracting to: {}", dest.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Ensures `path` exists as a directory and wraps its canonical form.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory (or one of its ancestors) cannot be created
    /// - The path exists but is not a directory
    /// - The path cannot be canonicalized
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        ensure_dir_all(path)?;

        let canonical = path.canonicalize().map_err(|e| {
            ExtractionError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to canonicalize path {}: {e}", path.display()),
            ))
        })?;

        Ok(Self(canonical))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a validated entry path to this directory, using the host
    /// separator.
    #[inline]
    #[must_use]
    pub fn join(&self, entry: &EntryPath) -> PathBuf {
        self.0.join(entry.as_path())
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}
