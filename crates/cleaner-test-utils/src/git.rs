//! A temporary git repository whose index can be populated file by file.

use std::fs;
use std::path::Path;

use git2::Repository;
use tempfile::TempDir;

/// A real git repository in a temp directory.
///
/// Files added with [`GitFixture::add_file`] are written to disk and staged,
/// which is all `git ls-files` needs; no commit is made.
///
/// # Example
///
/// ```rust,no_run
/// use cleaner_test_utils::GitFixture;
///
/// let fixture = GitFixture::new();
/// fixture.add_file("lib/base/a.cc", "");
/// ```
pub struct GitFixture {
    repo: Repository,
    temp_dir: TempDir,
}

impl Default for GitFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl GitFixture {
    /// Initialise an empty repository.
    ///
    /// # Panics
    /// Panics if the temp dir or the repository cannot be created.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("GitFixture: failed to create temp dir");
        let repo = Repository::init(temp_dir.path()).unwrap_or_else(|e| {
            panic!(
                "GitFixture: failed to init repository at {}: {e}",
                temp_dir.path().display()
            )
        });
        Self { repo, temp_dir }
    }

    /// Root of the working tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `rel_path` without staging it.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write_file(&self, rel_path: &str, content: &str) {
        let full = self.root().join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("GitFixture: failed to create {}: {e}", parent.display()));
        }
        fs::write(&full, content)
            .unwrap_or_else(|e| panic!("GitFixture: failed to write {}: {e}", full.display()));
    }

    /// Write `content` to `rel_path` and stage it in the index.
    ///
    /// # Panics
    /// Panics if writing or staging fails.
    pub fn add_file(&self, rel_path: &str, content: &str) {
        self.write_file(rel_path, content);
        let mut index = self
            .repo
            .index()
            .unwrap_or_else(|e| panic!("GitFixture: failed to open index: {e}"));
        index
            .add_path(Path::new(rel_path))
            .unwrap_or_else(|e| panic!("GitFixture: failed to stage {rel_path}: {e}"));
        index
            .write()
            .unwrap_or_else(|e| panic!("GitFixture: failed to write index: {e}"));
    }

    /// Stage every path in `rel_paths` with empty content.
    pub fn add_files(&self, rel_paths: &[&str]) {
        for path in rel_paths {
            self.add_file(path, "");
        }
    }

    /// Read `rel_path` back as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, rel_path: &str) -> String {
        let full = self.root().join(rel_path);
        fs::read_to_string(&full)
            .unwrap_or_else(|e| panic!("GitFixture: failed to read {}: {e}", full.display()))
    }
}
