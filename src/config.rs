//! Options controlling prefix tree construction.

/// What to do when the dictionary contains the same entry twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with [`Error::DuplicateEntry`](crate::Error::DuplicateEntry)
    Reject,
    /// Keep the first occurrence and drop the rest, logging a warning
    KeepFirst,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Reject
    }
}

/// Options for [`PrefixTree::build_with`](crate::PrefixTree::build_with).
///
/// ```
/// use sequence_immutable::{BuildOptions, DuplicatePolicy};
///
/// let options = BuildOptions::default().with_duplicates(DuplicatePolicy::KeepFirst);
/// assert!(options.verify_order);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Handling of repeated dictionary entries
    pub duplicates: DuplicatePolicy,

    /// Check that the input is sorted before building
    pub verify_order: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            duplicates: DuplicatePolicy::default(),
            verify_order: true,
        }
    }
}

impl BuildOptions {
    /// Returns these options with a different duplicate policy.
    pub fn with_duplicates(self, duplicates: DuplicatePolicy) -> Self {
        BuildOptions { duplicates, ..self }
    }

    /// Returns these options with order verification switched on or off.
    pub fn with_verify_order(self, verify_order: bool) -> Self {
        BuildOptions {
            verify_order,
            ..self
        }
    }
}
