//! Path predicates and the partition step the classifier is built from

/// A test on a relative path.
///
/// Each variant matches when *any* of its patterns matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate<'a> {
    Prefix(&'a [&'a str]),
    Suffix(&'a [&'a str]),
    Contains(&'a [&'a str]),
}

impl Predicate<'_> {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Predicate::Prefix(parts) => parts.iter().any(|p| path.starts_with(p)),
            Predicate::Suffix(parts) => parts.iter().any(|p| path.ends_with(p)),
            Predicate::Contains(parts) => parts.iter().any(|p| path.contains(p)),
        }
    }
}

/// Split `items` into `(matched, rest)`, keeping the input order in both.
pub fn partition(items: Vec<String>, predicate: Predicate<'_>) -> (Vec<String>, Vec<String>) {
    items.into_iter().partition(|item| predicate.matches(item))
}
