//! The end-to-end run: list, classify, render, reconcile

use cleaner_git::{FileLister, GitLsFiles};

use crate::classify::{Buckets, classify};
use crate::reconcile::reconcile;
use crate::render::{Artifact, render_artifacts};
use crate::report::RunReport;
use crate::version::Versions;
use crate::{Config, Result};

/// Regenerates or checks the build lists for one source tree.
pub struct BuildCleaner {
    config: Config,
    lister: Box<dyn FileLister>,
}

impl BuildCleaner {
    /// Use `git ls-files` with the configured binary.
    pub fn new(config: Config) -> Self {
        let lister = GitLsFiles::new(config.git_bin.clone());
        Self::with_lister(config, Box::new(lister))
    }

    /// Use a custom file source.
    pub fn with_lister(config: Config, lister: Box<dyn FileLister>) -> Self {
        Self { config, lister }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// List and classify the tracked files.
    pub fn buckets(&self) -> Result<Buckets> {
        let files = self.lister.list_files(&self.config.src_dir)?;
        classify(&files)
    }

    /// Render the artifacts without touching the files on disk.
    pub fn plan(&self) -> Result<Vec<Artifact>> {
        let versions = Versions::from_src_dir(&self.config.src_dir)?;
        let buckets = self.buckets()?;
        tracing::debug!(
            buckets = buckets.len(),
            files = buckets.file_count(),
            "classification complete"
        );
        render_artifacts(&buckets, &versions)
    }

    /// Render and reconcile every artifact in the configured mode.
    pub fn run(&self) -> Result<RunReport> {
        let artifacts = self.plan()?;
        reconcile(&self.config.src_dir, &artifacts, self.config.mode)
    }
}
