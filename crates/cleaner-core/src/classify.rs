//! Classification of tracked files into named buckets
//!
//! The rules run in a fixed order and each one only sees what the earlier
//! rules left behind, so a path that several rules would accept lands in
//! the bucket of the first. Every source file under the library root must
//! be claimed by some bucket; leftovers are reported as orphans.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::rules::{Predicate, partition};
use crate::{Error, Result};

/// Root of the library sources, relative to the repository.
pub const SOURCE_ROOT: &str = "lib/";

/// Codecs that get their own `codec_<name>_sources` bucket. Order matters
/// where one name is a prefix of a later one.
pub const CODEC_NAMES: &[&str] = &["apng", "exr", "gif", "jpegli", "jpg", "npy", "pgx", "pnm"];

const SOURCE_SUFFIXES: &[&str] = &[".cc", ".h", ".ui"];
const JPEGLI_PREFIX: &[&str] = &["jpegli"];
// Referenced by hand from the CMake build.
const STUB_SUFFIX: &[&str] = &["nothing.cc"];
const TEST_SUFFIX: &[&str] = &["_test.cc"];
const TESTING_HEADER: &[&str] = &["testing.h"];
const TESTLIB_MARKER: &[&str] = &["test"];
const LIBJPEG_HELPER_MARKER: &[&str] = &["libjpeg_test_util"];
const WRAPPER_SUFFIX: &[&str] = &["libjpeg_wrapper.cc"];
const EXTRAS_PREFIX: &[&str] = &["extras/"];
const THREADS_PREFIX: &[&str] = &["threads/"];
const BASE_PREFIX: &[&str] = &["base/"];
const CMS_PREFIX: &[&str] = &["cms/"];
const TOOLS_MARKERS: &[&str] = &[
    "/codec",
    "/hlg",
    "/metrics",
    "/packed_image_convert",
    "/render_hdr",
    "/tone_mapping",
];

/// Classified files keyed by bucket name, iterated in name order.
///
/// Paths are relative to [`SOURCE_ROOT`]. No path is in two buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    inner: BTreeMap<String, Vec<String>>,
}

impl Buckets {
    /// Add a bucket, failing if the name is taken.
    pub fn insert(&mut self, name: impl Into<String>, files: Vec<String>) -> Result<()> {
        insert_unique(&mut self.inner, name.into(), files)
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.inner.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of files across all buckets.
    pub fn file_count(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }

    /// Name of the bucket holding `path`, if any.
    pub fn bucket_of(&self, path: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(_, files)| files.iter().any(|f| f == path))
            .map(|(name, _)| name.as_str())
    }
}

impl IntoIterator for Buckets {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

/// Insert `value` under `name`, refusing to overwrite.
pub(crate) fn insert_unique<V>(map: &mut BTreeMap<String, V>, name: String, value: V) -> Result<()> {
    match map.entry(name) {
        Entry::Occupied(e) => Err(Error::DuplicateVariable {
            name: e.key().clone(),
        }),
        Entry::Vacant(e) => {
            e.insert(value);
            Ok(())
        }
    }
}

/// Partition the repository file list into buckets.
///
/// `repo_files` are repository-relative paths; anything outside
/// [`SOURCE_ROOT`] or without a source suffix is ignored.
///
/// # Errors
///
/// [`Error::OrphanSources`] when library sources are left unclaimed.
pub fn classify(repo_files: &[String]) -> Result<Buckets> {
    let mut srcs: Vec<String> = repo_files
        .iter()
        .filter_map(|path| path.strip_prefix(SOURCE_ROOT))
        .map(str::to_string)
        .collect();
    srcs.sort();
    let (srcs, _) = partition(srcs, Predicate::Suffix(SOURCE_SUFFIXES));

    // jpegli runs through its own copy of the rules
    let (jpegli, srcs) = partition(srcs, Predicate::Prefix(JPEGLI_PREFIX));
    let (_, srcs) = partition(srcs, Predicate::Suffix(STUB_SUFFIX));

    let (tests, srcs) = partition(srcs, Predicate::Suffix(TEST_SUFFIX));
    let (jpegli_tests, jpegli) = partition(jpegli, Predicate::Suffix(TEST_SUFFIX));

    let (_, srcs) = partition(srcs, Predicate::Contains(TESTING_HEADER));
    let (_, jpegli) = partition(jpegli, Predicate::Contains(TESTING_HEADER));

    let (testlib_files, srcs) = partition(srcs, Predicate::Contains(TESTLIB_MARKER));
    let (jpegli_testlib, jpegli) = partition(jpegli, Predicate::Contains(TESTLIB_MARKER));
    let (jpegli_libjpeg_helper_files, jpegli_testlib_files) =
        partition(jpegli_testlib, Predicate::Contains(LIBJPEG_HELPER_MARKER));

    let (extras, srcs) = partition(srcs, Predicate::Prefix(EXTRAS_PREFIX));
    let (threads_sources, srcs) = partition(srcs, Predicate::Prefix(THREADS_PREFIX));
    let (base_sources, srcs) = partition(srcs, Predicate::Prefix(BASE_PREFIX));
    let (cms_sources, srcs) = partition(srcs, Predicate::Prefix(CMS_PREFIX));

    if !srcs.is_empty() {
        tracing::error!(count = srcs.len(), "orphan source files");
        return Err(Error::OrphanSources { paths: srcs });
    }

    let (jpegli_wrapper_sources, jpegli_sources) =
        partition(jpegli, Predicate::Suffix(WRAPPER_SUFFIX));

    let mut buckets = Buckets::default();

    let mut extras = extras;
    for codec in CODEC_NAMES {
        let prefixes = [format!("extras/dec/{codec}"), format!("extras/enc/{codec}")];
        let prefixes: Vec<&str> = prefixes.iter().map(String::as_str).collect();
        let (codec_sources, rest) = partition(extras, Predicate::Prefix(&prefixes));
        extras = rest;
        buckets.insert(format!("codec_{codec}_sources"), codec_sources)?;
    }

    let (extras_for_tools_sources, extras_sources) =
        partition(extras, Predicate::Contains(TOOLS_MARKERS));

    for (name, files) in [
        ("base_sources", base_sources),
        ("cms_sources", cms_sources),
        ("extras_for_tools_sources", extras_for_tools_sources),
        ("extras_sources", extras_sources),
        ("jpegli_sources", jpegli_sources),
        ("jpegli_testlib_files", jpegli_testlib_files),
        ("jpegli_libjpeg_helper_files", jpegli_libjpeg_helper_files),
        ("jpegli_tests", jpegli_tests),
        ("jpegli_wrapper_sources", jpegli_wrapper_sources),
        ("testlib_files", testlib_files),
        ("tests", tests),
        ("threads_sources", threads_sources),
    ] {
        buckets.insert(name, files)?;
    }

    for (name, files) in buckets.iter() {
        tracing::debug!(bucket = name, count = files.len(), "classified");
    }

    Ok(buckets)
}
