//! Error types for cleaner-git

use std::process::ExitStatus;

/// Result type for cleaner-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while listing tracked files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}
