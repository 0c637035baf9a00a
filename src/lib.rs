//! # Sequence Immutable
//!
//! Generic algorithms over fixed, immutable, ordered sequences.
//!
//! Every operation in this crate returns a new value; nothing is modified in
//! place. Sequences share their storage through `Arc`, so slicing and cloning
//! never copy elements.
//!
//! ## Features
//!
//! - **Sequences**: `Sequence<T>` with O(1) `head`, `tail`, `slice` and `split`
//! - **Sorting**: stable merge sort, merge, index sort and map sort over any comparator
//! - **Searching**: binary search with a visitor receiving the match and its index
//! - **Grouping**: run-length grouping of sorted sequences, with optional filtering
//! - **Maps**: `SequenceMap<K, V>`, a sorted sequence of unique-key pairs
//! - **Prefix Trees**: `PrefixTree` for exact, prefix and longest-prefix matching
//!   over a sorted dictionary
//!
//! ## Example
//!
//! ```rust
//! use sequence_immutable::{group_by, sort, sorted_search, PrefixTree, Sequence};
//!
//! let sorted = sort(&[3, 9, 1, 7]);
//! assert_eq!(sorted.as_slice(), &[1, 3, 7, 9]);
//! assert!(sorted_search(sorted.as_slice(), &7));
//!
//! let words = Sequence::from(vec!["far", "fast", "gold"]);
//! let groups = group_by(&words, |w| w.as_bytes()[0]);
//! assert_eq!(groups.len(), 2);
//!
//! let tree = PrefixTree::build(words.as_slice()).unwrap();
//! assert!(tree.search("fast"));
//! assert!(!tree.search("fa"));
//! ```

pub mod compare;
pub mod config;
pub mod group;
pub mod key;
pub mod map;
pub mod node;
mod prefix_view;
pub mod search;
mod sequence;
pub mod sort;
pub mod transform;
mod trie;
mod util;

// Re-export public types
pub use crate::compare::{ByKey, Comparator, Greater, Less, Lexicographic};
pub use crate::config::{BuildOptions, DuplicatePolicy};
pub use crate::group::{filtered_group_by, group_by, group_by_excluding, FilteredGroups, Group};
pub use crate::key::{AsStr, First, Identity, KeyExtractor, Second};
pub use crate::map::SequenceMap;
pub use crate::node::{Branch, TrieNode};
pub use crate::prefix_view::{PrefixIter, PrefixView};
pub use crate::search::{
    find_index, sorted_map_search, sorted_search, sorted_search_by, sorted_search_by_key,
    sorted_search_with,
};
pub use crate::sequence::Sequence;
pub use crate::sort::{
    index_sort, is_sorted_by, map_sort, merge, merge_by, permute, sort, sort_by, sort_by_key,
};
pub use crate::transform::{filter, partition, reject, zip, zip_pairs};
pub use crate::trie::PrefixTree;

use thiserror::Error;

/// Errors that can occur in sequence, map and tree operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Position past the end of a sequence
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Range that is reversed or reaches past the end
    #[error("range {begin}..{end} invalid for length {len}")]
    InvalidRange { begin: usize, end: usize, len: usize },

    /// Input that must be sorted is not; `index` is the first element out of order
    #[error("input not sorted at index {index}")]
    Unsorted { index: usize },

    /// A key or dictionary entry repeats the one before it
    #[error("duplicate entry at index {index}")]
    DuplicateEntry { index: usize },

    /// A dictionary entry with no symbols
    #[error("empty dictionary entry at index {index}")]
    EmptyEntry { index: usize },

    /// Sequences that must have equal length do not
    #[error("sequence {index} has length {found}, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::IndexOutOfBounds { index: 7, len: 7 }.to_string(),
            "index 7 out of bounds for length 7"
        );
        assert_eq!(
            Error::InvalidRange { begin: 5, end: 2, len: 7 }.to_string(),
            "range 5..2 invalid for length 7"
        );
        assert_eq!(
            Error::LengthMismatch { index: 1, expected: 4, found: 3 }.to_string(),
            "sequence 1 has length 3, expected 4"
        );
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Sequence<String>>();
        assert_send_sync::<SequenceMap<u32, String>>();
        assert_send_sync::<PrefixTree<u8, String>>();
    }
}
