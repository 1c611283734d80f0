//! Tracked-file listing for build-cleaner
//!
//! The generated build lists only ever mention files that are under
//! version control, so the file list comes from the git index rather
//! than a directory walk.

pub mod error;
pub mod lister;

pub use error::{Error, Result};
pub use lister::{DEFAULT_GIT_BIN, FileLister, GitLsFiles, StaticFiles};
