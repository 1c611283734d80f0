//! Core pipeline for build-cleaner
//!
//! Tracked files are classified into named buckets, rendered into the
//! Bazel, GN and CMake list fragments, and compared against the copies
//! on disk:
//!
//! lister → [`classify`] → [`render`] → [`reconcile`]
//!
//! [`BuildCleaner`] runs the whole pipeline for one [`Config`].

pub mod classify;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod reconcile;
pub mod render;
pub mod report;
pub mod rules;
pub mod version;

pub use classify::{Buckets, classify};
pub use config::{Config, Mode};
pub use engine::BuildCleaner;
pub use error::{Error, Result};
pub use render::{Artifact, Value, render_artifacts};
pub use report::{ArtifactReport, ArtifactStatus, RunReport};
pub use version::Versions;
