//! Filesystem helpers for build-cleaner
//!
//! Generated artifacts are always read whole and replaced whole, so the
//! only operations needed are a plain text read and an atomic write.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
