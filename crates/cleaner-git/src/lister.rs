//! File lister trait and implementations

use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Git binary used when none is configured.
pub const DEFAULT_GIT_BIN: &str = "git";

/// Source of the repository file list.
///
/// Implementations return relative, `/`-separated paths sorted in byte
/// order. No filtering happens here.
pub trait FileLister {
    /// List every tracked file under `root`.
    fn list_files(&self, root: &Path) -> Result<Vec<String>>;
}

/// Lists the files in the git index with `git -C <root> ls-files`.
#[derive(Debug, Clone)]
pub struct GitLsFiles {
    git_bin: String,
}

impl GitLsFiles {
    /// Create a lister that runs the given git binary.
    pub fn new(git_bin: impl Into<String>) -> Self {
        Self {
            git_bin: git_bin.into(),
        }
    }

    /// The git binary this lister runs.
    pub fn git_bin(&self) -> &str {
        &self.git_bin
    }
}

impl Default for GitLsFiles {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_BIN)
    }
}

impl FileLister for GitLsFiles {
    fn list_files(&self, root: &Path) -> Result<Vec<String>> {
        tracing::debug!(git = %self.git_bin, root = %root.display(), "listing tracked files");

        let output = Command::new(&self.git_bin)
            .arg("-C")
            .arg(root)
            .arg("ls-files")
            .output()
            .map_err(|source| Error::Spawn {
                program: self.git_bin.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: self.git_bin.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let mut files: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();
        files.sort();

        tracing::debug!(count = files.len(), "tracked files listed");
        Ok(files)
    }
}

/// A fixed file list, for callers that already know the tracked files.
#[derive(Debug, Clone, Default)]
pub struct StaticFiles {
    files: Vec<String>,
}

impl StaticFiles {
    /// Wrap `files`, sorting them.
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut files: Vec<String> = files.into_iter().map(Into::into).collect();
        files.sort();
        Self { files }
    }
}

impl FileLister for StaticFiles {
    fn list_files(&self, _root: &Path) -> Result<Vec<String>> {
        Ok(self.files.clone())
    }
}
