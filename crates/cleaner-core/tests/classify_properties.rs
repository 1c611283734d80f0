//! Property tests for the classifier over generated file lists.

use std::collections::BTreeSet;

use cleaner_core::classify;
use proptest::prelude::*;

/// Directories that some rule always claims, so no generated path is an orphan.
const DIRS: &[&str] = &[
    "lib/base/",
    "lib/cms/",
    "lib/threads/",
    "lib/extras/",
    "lib/extras/dec/",
    "lib/extras/enc/",
    "lib/extras/tone_mapping/",
    "lib/jpegli/",
    "lib/jxl/testdata/",
    "tools/",
    "docs/",
];

const SUFFIXES: &[&str] = &[".cc", ".h", ".ui", "_test.cc", ".txt", ".md", "nothing.cc"];

fn repo_path() -> impl Strategy<Value = String> {
    (
        prop::sample::select(DIRS),
        "[a-z_]{1,10}",
        prop::sample::select(SUFFIXES),
    )
        .prop_map(|(dir, stem, suffix)| format!("{dir}{stem}{suffix}"))
}

fn repo_files() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(repo_path(), 0..60).prop_map(|set| set.into_iter().collect())
}

/// Whether a path is a library source the classifier must account for.
fn qualifies(path: &str) -> bool {
    path.starts_with("lib/") && [".cc", ".h", ".ui"].iter().any(|s| path.ends_with(s))
}

proptest! {
    #[test]
    fn test_buckets_are_disjoint(files in repo_files()) {
        let buckets = classify(&files).unwrap();

        let mut seen = BTreeSet::new();
        for (_, paths) in buckets.iter() {
            for path in paths {
                prop_assert!(seen.insert(path.clone()), "{path} is in two buckets");
            }
        }
    }

    #[test]
    fn test_every_qualifying_file_is_bucketed_or_deliberately_dropped(files in repo_files()) {
        let buckets = classify(&files).unwrap();

        let bucketed: BTreeSet<String> = buckets
            .iter()
            .flat_map(|(_, paths)| paths.iter().map(|p| format!("lib/{p}")))
            .collect();
        let qualifying: BTreeSet<String> = files.iter().filter(|p| qualifies(p)).cloned().collect();

        prop_assert!(bucketed.is_subset(&qualifying));
        for path in qualifying.difference(&bucketed) {
            let dropped = path.ends_with("nothing.cc") || path.contains("testing.h");
            prop_assert!(dropped, "{path} vanished");
        }
    }

    #[test]
    fn test_classification_is_deterministic(files in repo_files()) {
        let first = classify(&files).unwrap();
        let second = classify(&files).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_bucket_contents_are_sorted(files in repo_files()) {
        let buckets = classify(&files).unwrap();
        for (_, paths) in buckets.iter() {
            prop_assert!(paths.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
