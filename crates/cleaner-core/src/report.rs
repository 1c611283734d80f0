//! Per-artifact and per-run outcome reporting

use serde::{Deserialize, Serialize};

use crate::Mode;
use crate::diff::DiffStats;

/// What happened to one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// On-disk content already matches
    Current,
    /// Content differs and was left alone (check mode)
    Drifted,
    /// Content differed and was rewritten (update mode)
    Updated,
}

/// Outcome for a single generated file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactReport {
    /// Path relative to the source root
    pub path: String,
    pub status: ArtifactStatus,
    /// Unified diff from the on-disk text to the rendered text, when drifted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DiffStats>,
}

impl ArtifactReport {
    pub fn current(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: ArtifactStatus::Current,
            diff: None,
            stats: None,
        }
    }

    pub fn drifted(path: impl Into<String>, diff: String, stats: DiffStats) -> Self {
        Self {
            path: path.into(),
            status: ArtifactStatus::Drifted,
            diff: Some(diff),
            stats: Some(stats),
        }
    }

    pub fn updated(path: impl Into<String>, stats: DiffStats) -> Self {
        Self {
            path: path.into(),
            status: ArtifactStatus::Updated,
            diff: None,
            stats: Some(stats),
        }
    }
}

/// Report from one run over all artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub mode: Mode,
    pub artifacts: Vec<ArtifactReport>,
}

impl RunReport {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            artifacts: Vec::new(),
        }
    }

    pub fn push(&mut self, report: ArtifactReport) {
        self.artifacts.push(report);
    }

    /// True when no artifact was left drifted.
    pub fn is_success(&self) -> bool {
        !self
            .artifacts
            .iter()
            .any(|a| a.status == ArtifactStatus::Drifted)
    }

    pub fn drifted(&self) -> impl Iterator<Item = &ArtifactReport> {
        self.with_status(ArtifactStatus::Drifted)
    }

    pub fn updated(&self) -> impl Iterator<Item = &ArtifactReport> {
        self.with_status(ArtifactStatus::Updated)
    }

    fn with_status(&self, status: ArtifactStatus) -> impl Iterator<Item = &ArtifactReport> {
        self.artifacts.iter().filter(move |a| a.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> DiffStats {
        DiffStats {
            added: 1,
            removed: 1,
            similarity: 0.5,
        }
    }

    #[test]
    fn test_empty_report_is_success() {
        assert!(RunReport::new(Mode::Check).is_success());
    }

    #[test]
    fn test_any_drift_fails_the_run() {
        let mut report = RunReport::new(Mode::Check);
        report.push(ArtifactReport::current("lib/jxl_lists.bzl"));
        report.push(ArtifactReport::drifted("lib/lib.gni", "diff".to_string(), stats()));

        assert!(!report.is_success());
        assert_eq!(report.drifted().count(), 1);
    }

    #[test]
    fn test_updates_count_as_success() {
        let mut report = RunReport::new(Mode::Update);
        report.push(ArtifactReport::updated("lib/jxl_lists.cmake", stats()));
        report.push(ArtifactReport::current("lib/lib.gni"));

        assert!(report.is_success());
        assert_eq!(report.updated().map(|a| a.path.as_str()).collect::<Vec<_>>(), vec!["lib/jxl_lists.cmake"]);
    }

    #[test]
    fn test_serializes_status_lowercase_and_skips_empty_diff() {
        let mut report = RunReport::new(Mode::Check);
        report.push(ArtifactReport::current("lib/lib.gni"));

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["mode"], "check");
        assert_eq!(json["artifacts"][0]["status"], "current");
        assert!(json["artifacts"][0].get("diff").is_none());
    }
}
