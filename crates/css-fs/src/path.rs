//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A path normalized to use forward slashes internally.
///
/// Stylesheet paths arrive from build tooling in whatever shape the caller
/// had at hand: Windows separators, `./` prefixes, doubled slashes. All of
/// that is folded away here so that rule matching only ever sees one form.
///
/// Normalization is purely lexical. `..` segments are kept as-is and the
/// filesystem is never consulted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes, drops `.` and empty
    /// segments, and keeps a leading `/` for absolute paths.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str.replace('\\', "/")),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether the path is empty (no segments at all).
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether the path starts at the filesystem root.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// The directory part of the path as a string, or `""` for a bare file name.
    pub fn dir(&self) -> &str {
        match self.inner.rfind('/') {
            Some(0) => "/",
            Some(idx) => &self.inner[..idx],
            None => "",
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// File name without its final extension.
    ///
    /// Only the last extension is removed, so `main-ie8.min.css`
    /// yields `main-ie8.min`.
    pub fn file_stem(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(idx) if idx > 0 => Some(&name[..idx]),
            _ => Some(name),
        }
    }

    /// Iterate over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|s| !s.is_empty())
    }

    /// Segment-aware prefix test.
    ///
    /// `app/views` is inside `app` but `application/views` is not. An
    /// absolute prefix never contains a relative path, and vice versa.
    pub fn starts_with_dir(&self, prefix: &str) -> bool {
        let prefix = NormalizedPath::new(prefix);
        if prefix.is_empty() {
            return true;
        }
        if prefix.is_absolute() != self.is_absolute() {
            return false;
        }
        let mut own = self.segments();
        prefix.segments().all(|segment| own.next() == Some(segment))
    }

    /// The remainder of this path below `prefix`, if it lies inside it.
    pub fn strip_dir_prefix(&self, prefix: &str) -> Option<Self> {
        if !self.starts_with_dir(prefix) {
            return None;
        }
        let depth = NormalizedPath::new(prefix).segments().count();
        Some(Self {
            inner: self.segments().skip(depth).collect::<Vec<_>>().join("/"),
        })
    }
}

/// Collapse duplicate separators and `.` segments.
fn clean(raw: &str) -> String {
    let absolute = raw.starts_with('/');
    let joined = raw
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/");

    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<NormalizedPath> for String {
    fn from(p: NormalizedPath) -> Self {
        p.inner
    }
}
