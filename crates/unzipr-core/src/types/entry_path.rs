//! Validated relative path derived from an archive entry name.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionError;
use crate::Result;

/// An entry name turned into a relative path that stays inside the
/// destination directory.
///
/// Entry names use `/` as stored in the archive; `\` is accepted as a
/// separator too. Empty and `.` components are dropped. A `..` component or
/// a rooted name is rejected as [`ExtractionError::PathTraversal`], and a NUL
/// byte as [`ExtractionError::InvalidEntryName`].
///
/// There is no `From<String>`; the only constructor is [`EntryPath::parse`].
///
/// # Examples
///
/// ```
/// use unzipr_core::types::EntryPath;
/// use std::path::Path;
///
/// let path = EntryPath::parse("a/./b/c.txt").unwrap();
/// assert_eq!(path.as_path(), Path::new("a").join("b").join("c.txt"));
///
/// assert!(EntryPath::parse("../etc/passwd").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPath(PathBuf);

impl EntryPath {
    /// Parses and validates an entry name.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::PathTraversal` for `..`, absolute or prefixed names
    /// - `ExtractionError::InvalidEntryName` for names containing NUL
    pub fn parse(name: &str) -> Result<Self> {
        if name.contains('\0') {
            return Err(ExtractionError::InvalidEntryName {
                name: name.to_string(),
                reason: "contains a NUL byte",
            });
        }

        if name.starts_with(['/', '\\']) {
            return Err(ExtractionError::PathTraversal {
                name: name.to_string(),
            });
        }

        let mut path = PathBuf::new();
        for part in name.split(['/', '\\']) {
            match part {
                "" | "." => {}
                ".." => {
                    return Err(ExtractionError::PathTraversal {
                        name: name.to_string(),
                    });
                }
                _ => {
                    // Catches drive prefixes such as `C:` on Windows.
                    let mut components = Path::new(part).components();
                    match (components.next(), components.next()) {
                        (Some(Component::Normal(_)), None) => path.push(part),
                        _ => {
                            return Err(ExtractionError::PathTraversal {
                                name: name.to_string(),
                            });
                        }
                    }
                }
            }
        }

        Ok(Self(path))
    }

    /// Returns `true` if the name resolved to the destination root itself
    /// (for example `"./"`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        let path = EntryPath::parse("file.txt").unwrap();
        assert_eq!(path.as_path(), Path::new("file.txt"));
        assert!(!path.is_empty());
    }

    #[test]
    fn test_nested_name_uses_host_separator() {
        let path = EntryPath::parse("a/b/c.txt").unwrap();
        let expected: PathBuf = ["a", "b", "c.txt"].iter().collect();
        assert_eq!(path.as_path(), expected);
    }

    #[test]
    fn test_directory_marker_trailing_slash() {
        let path = EntryPath::parse("notes/").unwrap();
        assert_eq!(path.as_path(), Path::new("notes"));
    }

    #[test]
    fn test_backslash_separator() {
        let path = EntryPath::parse("dir\\file.txt").unwrap();
        assert_eq!(path.as_path(), Path::new("dir").join("file.txt"));
    }

    #[test]
    fn test_current_dir_components_dropped() {
        let path = EntryPath::parse("./a//./b").unwrap();
        assert_eq!(path.as_path(), Path::new("a").join("b"));
    }

    #[test]
    fn test_root_only_is_empty() {
        assert!(EntryPath::parse("./").unwrap().is_empty());
        assert!(EntryPath::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parent_traversal_rejected() {
        for name in ["../evil.txt", "a/../../evil.txt", "a/..", "..\\evil.txt"] {
            let result = EntryPath::parse(name);
            assert!(
                matches!(result, Err(ExtractionError::PathTraversal { .. })),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_absolute_rejected() {
        assert!(matches!(
            EntryPath::parse("/etc/passwd"),
            Err(ExtractionError::PathTraversal { .. })
        ));
        assert!(matches!(
            EntryPath::parse("\\windows\\system32"),
            Err(ExtractionError::PathTraversal { .. })
        ));
    }

    #[test]
    fn test_nul_byte_rejected() {
        assert!(matches!(
            EntryPath::parse("bad\0name.txt"),
            Err(ExtractionError::InvalidEntryName { .. })
        ));
    }

    #[test]
    fn test_dotted_file_names_allowed() {
        let path = EntryPath::parse("...hidden/..file").unwrap();
        assert_eq!(path.as_path(), Path::new("...hidden").join("..file"));
    }
}
