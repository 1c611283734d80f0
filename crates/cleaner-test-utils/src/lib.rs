//! Shared test fixtures for the build-cleaner workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] — [`GitFixture`], a temporary repository with a staged index
//! - [`tree`] — writers for the CMake files the version reader expects

pub mod git;
pub mod tree;

pub use git::GitFixture;
