//! Error types for cleaner-cli

/// Exit code for I/O, git and version errors.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the lists are stale or a source file is unclaimed.
pub const EXIT_STALE: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] cleaner_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    /// Check mode found generated files that differ from the tree.
    #[error("Build files need update.")]
    Stale,
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Stale | CliError::Core(cleaner_core::Error::OrphanSources { .. }) => {
                EXIT_STALE
            }
            _ => EXIT_FAILURE,
        }
    }
}
