//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

use cleaner_core::{Config, Mode};
use cleaner_git::DEFAULT_GIT_BIN;

/// Check or update the generated build file lists
#[derive(Parser, Debug)]
#[command(name = "build-cleaner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root of the source tree
    #[arg(long, default_value = ".")]
    pub src_dir: PathBuf,

    /// Update the build files instead of only checking
    #[arg(long)]
    pub update: bool,

    /// Git binary used to list tracked files
    #[arg(long, env = "GIT_BIN", default_value = DEFAULT_GIT_BIN)]
    pub git_bin: String,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.update { Mode::Update } else { Mode::Check }
    }

    pub fn config(&self) -> Config {
        Config::new(self.src_dir.clone(), self.mode()).with_git_bin(self.git_bin.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_check_mode_in_current_dir() {
        let cli = Cli::try_parse_from(["build-cleaner"]).unwrap();
        assert_eq!(cli.mode(), Mode::Check);
        assert_eq!(cli.src_dir, PathBuf::from("."));
        assert!(!cli.json);
    }

    #[test]
    fn test_update_and_src_dir() {
        let cli =
            Cli::try_parse_from(["build-cleaner", "--update", "--src-dir", "/work/libjxl"]).unwrap();
        let config = cli.config();
        assert_eq!(config.mode, Mode::Update);
        assert_eq!(config.src_dir, PathBuf::from("/work/libjxl"));
    }

    #[test]
    fn test_git_bin_flag() {
        let cli = Cli::try_parse_from(["build-cleaner", "--git-bin", "/usr/local/bin/git"]).unwrap();
        assert_eq!(cli.config().git_bin, "/usr/local/bin/git");
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["build-cleaner", "--force"]).is_err());
    }
}
