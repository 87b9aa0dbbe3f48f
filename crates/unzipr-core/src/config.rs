//! Extraction configuration.

/// Default size of the intermediate copy buffer in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Tunables for an extraction run.
///
/// # Examples
///
/// ```
/// use unzipr_core::ExtractConfig;
///
/// let config = ExtractConfig::default();
/// assert_eq!(config.buffer_size, 4096);
///
/// let custom = ExtractConfig::default().with_buffer_size(64 * 1024);
/// assert_eq!(custom.buffer_size, 64 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Size of the buffer used to copy entry data into destination files.
    pub buffer_size: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ExtractConfig {
    /// Sets the copy buffer size. Zero is raised to one byte.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }
}
