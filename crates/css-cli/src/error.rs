//! Error types for css-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from css-core
    #[error(transparent)]
    Core(#[from] css_core::Error),

    /// Error from css-meta
    #[error(transparent)]
    Meta(#[from] css_meta::Error),

    /// Error from css-fs
    #[error(transparent)]
    Fs(#[from] css_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed JSON input
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
