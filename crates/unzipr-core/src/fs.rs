//! Directory creation shared by every extraction step.
//!
//! [`ensure_dir_all`] is the only way the crate creates directories: the
//! destination root, directory entries and the parents of file entries all go
//! through it, so missing ancestor chains are handled the same way everywhere.

use std::fs;
use std::io;
use std::io::ErrorKind;
use std::path::Path;

use tracing::trace;

use crate::ExtractionError;
use crate::Result;

/// Ensures `path` and all of its ancestors exist as directories.
///
/// The target is created first; if that fails because an ancestor is
/// missing, the parent chain is created bottom-up and the target retried.
/// An existing directory is success, an existing non-directory is an error.
///
/// # Errors
///
/// Returns [`ExtractionError::DirectoryCreation`] naming `path` if any level
/// cannot be created.
///
/// # Examples
///
/// ```no_run
/// use unzipr_core::fs::ensure_dir_all;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// ensure_dir_all(Path::new("/tmp/out/a/b/c"))?;
/// ensure_dir_all(Path::new("/tmp/out/a/b/c"))?; // idempotent
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir_all(path: &Path) -> Result<()> {
    create_recursive(path).map_err(|source| ExtractionError::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })
}

fn create_recursive(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }

    match fs::create_dir(path) {
        Ok(()) => {
            trace!(path = %path.display(), "created directory");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => accept_existing(path, e),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let parent = path.parent().ok_or(e)?;
            create_recursive(parent)?;
            match fs::create_dir(path) {
                Ok(()) => {
                    trace!(path = %path.display(), "created directory");
                    Ok(())
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => accept_existing(path, e),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}

fn accept_existing(path: &Path, err: io::Error) -> io::Result<()> {
    if path.is_dir() { Ok(()) } else { Err(err) }
}
