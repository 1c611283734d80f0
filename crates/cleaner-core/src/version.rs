//! Library version numbers read from the CMake build
//!
//! The lists carry the library version so the Bazel and GN builds do not
//! have to parse CMake themselves.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// CMake file declaring the JPEGXL_*_VERSION variables.
pub const LIB_CMAKE: &str = "lib/CMakeLists.txt";
/// CMake file declaring the libjpeg soversion.
pub const ROOT_CMAKE: &str = "CMakeLists.txt";

static MAJOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"set\(JPEGXL_MAJOR_VERSION ([0-9]+)\)").unwrap());
static MINOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"set\(JPEGXL_MINOR_VERSION ([0-9]+)\)").unwrap());
static PATCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"set\(JPEGXL_PATCH_VERSION ([0-9]+)\)").unwrap());
static SOVERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"set\(JPEGLI_LIBJPEG_LIBRARY_SOVERSION "([0-9]+)""#).unwrap()
});

/// Version numbers emitted as scalar variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versions {
    pub major: String,
    pub minor: String,
    pub patch: String,
    /// Two-digit libjpeg library version, e.g. `80` for soversion 8.
    pub jpegli_lib_version: String,
}

impl Versions {
    /// Read both CMake files under `src_dir`.
    pub fn from_src_dir(src_dir: &Path) -> Result<Self> {
        let lib_path = src_dir.join(LIB_CMAKE);
        let lib_text = cleaner_fs::read_text(&lib_path)?;
        let root_path = src_dir.join(ROOT_CMAKE);
        let root_text = cleaner_fs::read_text(&root_path)?;

        let (major, minor, patch) = parse_lib_version(&lib_text, &lib_path)?;
        let jpegli_lib_version = parse_jpegli_lib_version(&root_text, &root_path)?;

        let versions = Self {
            major,
            minor,
            patch,
            jpegli_lib_version,
        };
        tracing::debug!(?versions, "read versions");
        Ok(versions)
    }

    /// `(variable name, value)` pairs as they appear in the rendered lists.
    pub fn variables(&self) -> [(&'static str, &str); 4] {
        [
            ("jpegli_lib_version", self.jpegli_lib_version.as_str()),
            ("major_version", self.major.as_str()),
            ("minor_version", self.minor.as_str()),
            ("patch_version", self.patch.as_str()),
        ]
    }
}

/// Extract major, minor and patch from the library CMake text.
///
/// `path` is only used for error messages.
pub fn parse_lib_version(text: &str, path: &Path) -> Result<(String, String, String)> {
    let major = capture(&MAJOR_PATTERN, text, "JPEGXL_MAJOR_VERSION", path)?;
    let minor = capture(&MINOR_PATTERN, text, "JPEGXL_MINOR_VERSION", path)?;
    let patch = capture(&PATCH_PATTERN, text, "JPEGXL_PATCH_VERSION", path)?;
    Ok((major, minor, patch))
}

/// Extract the libjpeg soversion, padded to two digits with a trailing `0`.
pub fn parse_jpegli_lib_version(text: &str, path: &Path) -> Result<String> {
    let mut version = capture(
        &SOVERSION_PATTERN,
        text,
        "JPEGLI_LIBJPEG_LIBRARY_SOVERSION",
        path,
    )?;
    if version.len() == 1 {
        version.push('0');
    }
    Ok(version)
}

fn capture(pattern: &Regex, text: &str, variable: &str, path: &Path) -> Result<String> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::VersionNotFound {
            variable: variable.to_string(),
            path: path.to_path_buf(),
        })
}
