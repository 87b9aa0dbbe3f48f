//! Buffered copy from an entry stream into an output sink.
//!
//! A single [`CopyBuffer`] is allocated per extraction run and reused for
//! every file entry, so the copy loop itself never allocates.

use std::io;
use std::io::Read;
use std::io::Write;

use crate::config::DEFAULT_BUFFER_SIZE;

/// Reusable fixed-size buffer for copying entry data.
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a buffer of `size` bytes (at least one byte).
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            buf: vec![0u8; size.max(1)].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::with_size(DEFAULT_BUFFER_SIZE)
    }
}

/// Copies `reader` into `writer` until end-of-data, one buffer at a time.
///
/// Reads interrupted with [`io::ErrorKind::Interrupted`] are retried. Returns
/// the number of bytes copied.
///
/// # Errors
///
/// Returns the first read or write error.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use unzipr_core::copy::{CopyBuffer, copy_with_buffer};
///
/// let mut buffer = CopyBuffer::with_size(4);
/// let mut input = Cursor::new(b"buy milk".to_vec());
/// let mut output = Vec::new();
///
/// let copied = copy_with_buffer(&mut input, &mut output, &mut buffer).unwrap();
/// assert_eq!(copied, 8);
/// assert_eq!(output, b"buy milk");
/// ```
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> io::Result<u64> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;
        total += bytes_read as u64;
    }

    Ok(total)
}
