//! Line diffs between an artifact on disk and its rendered text

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// Lines of context around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// Size of a text change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f32,
}

impl DiffStats {
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self {
                added: 0,
                removed: 0,
                similarity: 1.0,
            };
        }

        let diff = TextDiff::from_lines(old, new);
        let (mut added, mut removed) = (0, 0);
        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => added += 1,
                ChangeTag::Delete => removed += 1,
                ChangeTag::Equal => {}
            }
        }

        Self {
            added,
            removed,
            similarity: diff.ratio(),
        }
    }
}

/// A `diff -u` style patch from `old` to `new`, labelled `a/<path>` and
/// `b/<path>`. Empty when the texts are equal.
pub fn unified_diff(old: &str, new: &str, path: &str) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_texts_have_empty_diff() {
        assert_eq!(unified_diff("a\nb\n", "a\nb\n", "lib/lib.gni"), "");
        let stats = DiffStats::compute("a\n", "a\n");
        assert_eq!((stats.added, stats.removed), (0, 0));
        assert_eq!(stats.similarity, 1.0);
    }

    #[test]
    fn test_unified_diff_has_labels_and_both_sides() {
        let diff = unified_diff(
            "set(X\n  old.cc\n)\n",
            "set(X\n  new.cc\n)\n",
            "lib/jxl_lists.cmake",
        );

        assert!(diff.starts_with("--- a/lib/jxl_lists.cmake\n+++ b/lib/jxl_lists.cmake\n"));
        assert!(diff.contains("\n-  old.cc\n"));
        assert!(diff.contains("\n+  new.cc\n"));
        assert!(diff.contains("@@ -1,3 +1,3 @@"));
    }

    #[test]
    fn test_stats_count_lines() {
        let stats = DiffStats::compute("a\nb\nc\n", "a\nc\nd\ne\n");
        assert_eq!(stats.added, 2);
        assert_eq!(stats.removed, 1);
        assert!(stats.similarity > 0.0 && stats.similarity < 1.0);
    }
}
