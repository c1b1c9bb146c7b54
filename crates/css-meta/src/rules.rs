//! Path rule table
//!
//! The rule table is the data half of resolution: which subtree is the
//! review application, which parts of it are left alone, and how legacy
//! stylesheets are named. The resolver in `css-core` is the logic half.
//!
//! # Example TOML
//!
//! ```toml
//! app_subtree = "app"
//! excluded_subtrees = ["app/views/full-page-examples"]
//! legacy_marker = "ie8"
//! pseudo_class_blacklist = [":not(", ":hover)"]
//! ```
//!
//! Every field is optional; missing fields take the built-in defaults.

use css_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Built-in application subtree.
pub const DEFAULT_APP_SUBTREE: &str = "app";

/// Built-in exclusion: the full-page examples render as standalone pages.
pub const DEFAULT_EXCLUDED_SUBTREES: &[&str] = &["app/views/full-page-examples"];

/// Built-in legacy file marker (`main-ie8.css`, `main-ie8.min.css`).
pub const DEFAULT_LEGACY_MARKER: &str = "ie8";

/// Selectors the pseudo-class plugin mangles when expanded.
pub const DEFAULT_PSEUDO_CLASS_BLACKLIST: &[&str] = &[
    ":not(",
    ":disabled)",
    ":last-child)",
    ":focus)",
    ":active)",
    ":hover)",
];

/// Path rules consulted by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTable {
    /// Subtree whose stylesheets get pseudo-class companions
    pub app_subtree: String,

    /// Subtrees inside the application that are skipped
    pub excluded_subtrees: Vec<String>,

    /// Marker before the extension identifying legacy stylesheets
    pub legacy_marker: String,

    /// Options passed through to the pseudo-class step
    pub pseudo_class_blacklist: Vec<String>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            app_subtree: DEFAULT_APP_SUBTREE.to_string(),
            excluded_subtrees: DEFAULT_EXCLUDED_SUBTREES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            legacy_marker: DEFAULT_LEGACY_MARKER.to_string(),
            pseudo_class_blacklist: DEFAULT_PSEUDO_CLASS_BLACKLIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl RuleTable {
    /// Load a rule table from a TOML, JSON, or YAML file and validate it.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let table: Self = ConfigStore::new().load(path)?;
        table.validate().map_err(|e| match e {
            Error::InvalidRuleTable { message } => Error::InvalidRuleTableFile {
                path: path.to_native(),
                message,
            },
            other => other,
        })?;
        tracing::debug!(path = %path, "Loaded rule table");
        Ok(table)
    }

    /// Load from `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &NormalizedPath) -> Result<Self> {
        if path.to_native().is_file() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path, "No rule table found, using defaults");
            Ok(Self::default())
        }
    }

    /// Check the table is internally consistent.
    ///
    /// The application subtree and the legacy marker must be non-empty, and
    /// every excluded subtree must lie inside the application subtree.
    pub fn validate(&self) -> Result<()> {
        let app = NormalizedPath::new(&self.app_subtree);
        if app.is_empty() {
            return Err(Error::InvalidRuleTable {
                message: "app_subtree must not be empty".to_string(),
            });
        }

        if self.legacy_marker.trim().is_empty() {
            return Err(Error::InvalidRuleTable {
                message: "legacy_marker must not be empty".to_string(),
            });
        }

        for excluded in &self.excluded_subtrees {
            let excluded = NormalizedPath::new(excluded);
            if excluded.is_empty() || !excluded.starts_with_dir(app.as_str()) {
                return Err(Error::InvalidRuleTable {
                    message: format!(
                        "excluded subtree '{}' is not inside app subtree '{}'",
                        excluded, app
                    ),
                });
            }
        }

        Ok(())
    }

    /// Application subtree in normalized form.
    pub fn app_path(&self) -> NormalizedPath {
        NormalizedPath::new(&self.app_subtree)
    }

    /// Excluded subtrees in normalized form.
    pub fn excluded_paths(&self) -> Vec<NormalizedPath> {
        self.excluded_subtrees.iter().map(NormalizedPath::new).collect()
    }
}
