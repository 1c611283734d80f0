//! Error types for cleaner-core

use std::path::PathBuf;

/// Result type for cleaner-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating the build lists
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Qualifying sources that no classification rule claims.
    #[error("Orphan source files: {paths:?}")]
    OrphanSources { paths: Vec<String> },

    #[error("Variable '{name}' is defined more than once")]
    DuplicateVariable { name: String },

    #[error("Could not find {variable} in {path}")]
    VersionNotFound { variable: String, path: PathBuf },

    #[error(transparent)]
    Fs(#[from] cleaner_fs::Error),

    #[error(transparent)]
    Git(#[from] cleaner_git::Error),
}
