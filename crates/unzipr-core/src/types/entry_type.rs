//! Archive entry type enumeration.

/// Type of entry in an archive.
///
/// # Examples
///
/// ```
/// use unzipr_core::types::EntryType;
///
/// assert!(EntryType::Directory.is_directory());
/// assert!(EntryType::File.is_file());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Regular file entry with a byte payload.
    File,

    /// Directory marker entry.
    Directory,
}

impl EntryType {
    /// Classifies an entry by the directory flag read from the archive.
    #[must_use]
    pub const fn from_is_dir(is_dir: bool) -> Self {
        if is_dir { Self::Directory } else { Self::File }
    }

    /// Returns `true` if this is a regular file.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns `true` if this is a directory.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_is_dir() {
        assert_eq!(EntryType::from_is_dir(true), EntryType::Directory);
        assert_eq!(EntryType::from_is_dir(false), EntryType::File);
    }

    #[test]
    fn test_predicates_are_exclusive() {
        assert!(EntryType::File.is_file());
        assert!(!EntryType::File.is_directory());
        assert!(EntryType::Directory.is_directory());
        assert!(!EntryType::Directory.is_file());
    }
}
