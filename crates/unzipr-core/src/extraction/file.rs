//! Writing a single file entry to disk.

use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use crate::ExtractionError;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::fs::ensure_dir_all;

/// Copies `reader` into a new file at `path`, creating its ancestor chain.
///
/// An existing file is truncated. The output handle is flushed on success
/// and closed on every path. Returns the number of bytes written.
///
/// # Errors
///
/// - `ExtractionError::DirectoryCreation` if a parent cannot be created
/// - `ExtractionError::OutputOpen` if the file cannot be created
/// - `ExtractionError::Copy` if reading the entry or writing the file fails
pub(crate) fn extract_file<R: Read + ?Sized>(
    reader: &mut R,
    path: &Path,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    if let Some(parent) = path.parent() {
        ensure_dir_all(parent)?;
    }

    let file = File::create(path).map_err(|source| ExtractionError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let copy_error = |source| ExtractionError::Copy {
        path: path.to_path_buf(),
        source,
    };
    let written = copy_with_buffer(reader, &mut writer, buffer).map_err(copy_error)?;
    writer.flush().map_err(copy_error)?;

    Ok(written)
}
