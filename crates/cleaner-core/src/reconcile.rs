//! Comparing rendered artifacts with the files on disk

use std::path::Path;

use crate::diff::{DiffStats, unified_diff};
use crate::render::Artifact;
use crate::report::{ArtifactReport, RunReport};
use crate::{Mode, Result};

/// Compare every artifact with its file under `src_dir`.
///
/// In [`Mode::Update`] differing files are rewritten; in [`Mode::Check`]
/// nothing is written and differences are reported as diffs.
pub fn reconcile(src_dir: &Path, artifacts: &[Artifact], mode: Mode) -> Result<RunReport> {
    let mut report = RunReport::new(mode);
    for artifact in artifacts {
        report.push(reconcile_one(src_dir, artifact, mode)?);
    }
    Ok(report)
}

/// Compare one artifact. The file must already exist.
pub fn reconcile_one(src_dir: &Path, artifact: &Artifact, mode: Mode) -> Result<ArtifactReport> {
    let file_path = src_dir.join(artifact.path);
    let on_disk = cleaner_fs::read_text(&file_path)?;

    if on_disk == artifact.text {
        tracing::debug!(path = artifact.path, "up to date");
        return Ok(ArtifactReport::current(artifact.path));
    }

    let stats = DiffStats::compute(&on_disk, &artifact.text);
    match mode {
        Mode::Update => {
            tracing::info!(path = artifact.path, "Updating {}", artifact.path);
            cleaner_fs::write_text(&file_path, &artifact.text)?;
            Ok(ArtifactReport::updated(artifact.path, stats))
        }
        Mode::Check => {
            tracing::debug!(
                path = artifact.path,
                added = stats.added,
                removed = stats.removed,
                "drifted"
            );
            let diff = unified_diff(&on_disk, &artifact.text, artifact.path);
            Ok(ArtifactReport::drifted(artifact.path, diff, stats))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ArtifactStatus;
    use std::fs;
    use tempfile::TempDir;

    fn artifact(text: &str) -> Artifact {
        Artifact {
            path: "lib/lib.gni",
            text: text.to_string(),
        }
    }

    fn setup(on_disk: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib")).unwrap();
        fs::write(temp.path().join("lib/lib.gni"), on_disk).unwrap();
        temp
    }

    #[test]
    fn test_matching_file_is_current() {
        let temp = setup("same\n");

        let report = reconcile_one(temp.path(), &artifact("same\n"), Mode::Check).unwrap();

        assert_eq!(report.status, ArtifactStatus::Current);
        assert!(report.diff.is_none());
    }

    #[test]
    fn test_check_mode_reports_diff_without_writing() {
        let temp = setup("libjxl_x = 1\n");

        let report = reconcile_one(temp.path(), &artifact("libjxl_x = 2\n"), Mode::Check).unwrap();

        assert_eq!(report.status, ArtifactStatus::Drifted);
        let diff = report.diff.unwrap();
        assert!(diff.contains("-libjxl_x = 1"));
        assert!(diff.contains("+libjxl_x = 2"));
        assert_eq!(
            fs::read_to_string(temp.path().join("lib/lib.gni")).unwrap(),
            "libjxl_x = 1\n"
        );
    }

    #[test]
    fn test_update_mode_rewrites_file() {
        let temp = setup("old\n");

        let report = reconcile_one(temp.path(), &artifact("new\n"), Mode::Update).unwrap();

        assert_eq!(report.status, ArtifactStatus::Updated);
        assert_eq!(fs::read_to_string(temp.path().join("lib/lib.gni")).unwrap(), "new\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();

        let result = reconcile_one(temp.path(), &artifact("x\n"), Mode::Update);

        assert!(matches!(result, Err(crate::Error::Fs(_))));
    }

    #[test]
    fn test_reconcile_checks_every_artifact() {
        let temp = setup("a\n");
        fs::write(temp.path().join("lib/other.cmake"), "b\n").unwrap();
        let artifacts = vec![
            artifact("changed\n"),
            Artifact {
                path: "lib/other.cmake",
                text: "b\n".to_string(),
            },
        ];

        let report = reconcile(temp.path(), &artifacts, Mode::Check).unwrap();

        let statuses: Vec<_> = report.artifacts.iter().map(|a| a.status).collect();
        assert_eq!(statuses, vec![ArtifactStatus::Drifted, ArtifactStatus::Current]);
        assert!(!report.is_success());
    }
}
