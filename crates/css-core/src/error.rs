//! Error types for css-core

use crate::bootstrap::BootstrapStage;

/// Result type for css-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in css-core operations
///
/// Resolution itself never fails. Errors come from building a resolver out
/// of a bad rule table, or from the browser bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bootstrap stage failed; later stages were not run
    #[error("Browser bootstrap failed during {stage}: {message}")]
    BootstrapFailed {
        stage: BootstrapStage,
        message: String,
    },

    /// An external command could not be run or exited unsuccessfully
    #[error("Command failed: {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// Rule table error from css-meta
    #[error(transparent)]
    Meta(#[from] css_meta::Error),

    /// Filesystem error from css-fs
    #[error(transparent)]
    Fs(#[from] css_fs::Error),

    /// Legacy file pattern failed to compile
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
