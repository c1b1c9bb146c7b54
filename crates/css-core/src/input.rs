//! Resolver inputs
//!
//! Build tools hand the resolver either a bare path string or a file
//! object that carries a `path` field (plus whatever else the tool tracks).
//! Both shapes are accepted here and folded into a single
//! [`NormalizedPath`] before any rule runs.

use std::path::{Path, PathBuf};

use css_fs::NormalizedPath;
use css_meta::Environment;
use serde::{Deserialize, Serialize};

/// A stylesheet the caller wants a pipeline for.
///
/// Only the path string is ever inspected. The file is never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileReference {
    /// `"app/assets/scss/app.css"`
    Path(String),
    /// `{ "path": "app/assets/scss/app.css", ... }`; other fields are ignored
    Object { path: String },
}

impl FileReference {
    /// The raw path string, whichever shape it arrived in.
    pub fn path(&self) -> &str {
        match self {
            FileReference::Path(path) => path,
            FileReference::Object { path } => path,
        }
    }

    /// The path in normalized form.
    pub fn normalized(&self) -> NormalizedPath {
        NormalizedPath::new(self.path())
    }
}

impl From<&str> for FileReference {
    fn from(path: &str) -> Self {
        FileReference::Path(path.to_string())
    }
}

impl From<String> for FileReference {
    fn from(path: String) -> Self {
        FileReference::Path(path)
    }
}

impl From<&Path> for FileReference {
    fn from(path: &Path) -> Self {
        FileReference::Path(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for FileReference {
    fn from(path: PathBuf) -> Self {
        FileReference::from(path.as_path())
    }
}

/// Options object accepted by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Requested deployment environment
    pub env: Environment,

    /// Stylesheet being built, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileReference>,
}

impl ResolveOptions {
    pub fn new(env: impl Into<Environment>) -> Self {
        Self {
            env: env.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<FileReference>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Normalized path of the file, if one was given.
    pub fn path(&self) -> Option<NormalizedPath> {
        self.file.as_ref().map(FileReference::normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_and_object_normalize_alike() {
        let as_string = FileReference::from("app\\assets\\app.css");
        let as_object = FileReference::Object {
            path: "./app/assets/app.css".to_string(),
        };
        assert_eq!(as_string.normalized(), as_object.normalized());
    }

    #[test]
    fn test_deserialize_string_file() {
        let options: ResolveOptions =
            serde_json::from_value(json!({ "env": "production", "file": "example.css" })).unwrap();
        assert_eq!(options.file, Some(FileReference::Path("example.css".into())));
    }

    #[test]
    fn test_deserialize_object_file_ignores_extra_fields() {
        let options: ResolveOptions = serde_json::from_value(json!({
            "env": "oldie",
            "file": { "path": "example-ie8.css", "cwd": "/srv", "base": "/srv" }
        }))
        .unwrap();
        assert_eq!(options.env, Environment::Oldie);
        assert_eq!(options.file.unwrap().path(), "example-ie8.css");
    }

    #[test]
    fn test_deserialize_without_file() {
        let options: ResolveOptions = serde_json::from_value(json!({ "env": "test" })).unwrap();
        assert_eq!(options.env, Environment::Other("test".into()));
        assert!(options.path().is_none());
    }
}
