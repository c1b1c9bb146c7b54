//! Path predicates
//!
//! Each predicate looks at one property of a normalized path. The resolver
//! evaluates them in a fixed order and assembles the pipeline from the
//! answers.

use css_fs::NormalizedPath;
use regex::Regex;

/// Build the legacy file-name pattern for a marker.
///
/// Matches a file stem ending in `-<marker>` or `-<marker>.min`, so
/// `main-ie8.css` and `main-ie8.min.scss` both qualify.
pub fn legacy_pattern(marker: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"-{}(?:\.min)?$", regex::escape(marker.trim())))
}

/// Whether the file name marks a legacy-browser stylesheet.
pub fn is_legacy_stylesheet(path: &NormalizedPath, pattern: &Regex) -> bool {
    path.file_stem().is_some_and(|stem| pattern.is_match(stem))
}

/// Whether the file's directory lies under the application subtree.
pub fn in_app_subtree(path: &NormalizedPath, app: &NormalizedPath) -> bool {
    NormalizedPath::new(path.dir()).starts_with_dir(app.as_str())
}

/// Whether the file's directory lies under any excluded subtree.
pub fn in_excluded_subtree(path: &NormalizedPath, excluded: &[NormalizedPath]) -> bool {
    let dir = NormalizedPath::new(path.dir());
    excluded
        .iter()
        .any(|subtree| dir.starts_with_dir(subtree.as_str()))
}
