//! Error types for css-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] css_fs::Error),

    #[error("Invalid rule table: {message}")]
    InvalidRuleTable { message: String },

    #[error("Invalid rule table at {path}: {message}")]
    InvalidRuleTableFile { path: PathBuf, message: String },
}
