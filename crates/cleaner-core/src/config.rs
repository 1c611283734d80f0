//! Run configuration

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use cleaner_git::DEFAULT_GIT_BIN;

/// What to do with artifacts that differ from the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Report a diff and fail.
    #[default]
    Check,
    /// Overwrite the artifact.
    Update,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Check => write!(f, "check"),
            Mode::Update => write!(f, "update"),
        }
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the source tree; artifact and CMake paths are relative to it.
    pub src_dir: PathBuf,
    pub mode: Mode,
    /// Git binary used to list tracked files.
    pub git_bin: String,
}

impl Config {
    pub fn new(src_dir: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            src_dir: src_dir.into(),
            mode,
            git_bin: DEFAULT_GIT_BIN.to_string(),
        }
    }

    pub fn with_git_bin(mut self, git_bin: impl Into<String>) -> Self {
        self.git_bin = git_bin.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_git() {
        let config = Config::new("/src", Mode::Check);
        assert_eq!(config.git_bin, "git");
        assert_eq!(config.src_dir, PathBuf::from("/src"));
    }

    #[test]
    fn test_with_git_bin_overrides() {
        let config = Config::new(".", Mode::Update).with_git_bin("/opt/git/bin/git");
        assert_eq!(config.git_bin, "/opt/git/bin/git");
        assert_eq!(config.mode, Mode::Update);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Check.to_string(), "check");
        assert_eq!(Mode::Update.to_string(), "update");
    }
}
