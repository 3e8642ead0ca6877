//! Error types for toggle-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for a missing block, bad arguments or bad config.
pub const EXIT_USER: i32 = 1;
/// Exit code for filesystem failures.
pub const EXIT_IO: i32 = 2;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from toggle-engine
    #[error(transparent)]
    Engine(#[from] toggle_engine::Error),

    /// Error from toggle-fs
    #[error(transparent)]
    Fs(#[from] toggle_fs::Error),

    /// JSON output error
    #[error(transparent)]
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

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fs(toggle_fs::Error::Io { .. } | toggle_fs::Error::LockFailed { .. }) => EXIT_IO,
            _ => EXIT_USER,
        }
    }
}
