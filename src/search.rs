//! Binary search over sorted sequences, with optional visitors.
//!
//! All searches assume their input is sorted by the same order the probe is
//! compared with. That is a caller contract: on unsorted input the answer is
//! unspecified, but the search still terminates.

use std::cmp::Ordering;

use crate::key::{First, Identity, KeyExtractor};

/// Returns the position of the item whose key equals `probe`.
///
/// ```
/// use sequence_immutable::{find_index, Identity};
///
/// let items = [0, 1, 2, 3, 4, 5, 6];
/// assert_eq!(find_index(&items, &4, Identity), Some(4));
/// assert_eq!(find_index(&items, &7, Identity), None);
/// ```
pub fn find_index<T, E>(items: &[T], probe: &E::Key, extractor: E) -> Option<usize>
where
    E: KeyExtractor<T>,
    E::Key: Ord,
{
    sorted_search_by(items, |item| Ord::cmp(extractor.key(item), probe))
}

/// Searches `items` using `compare`, which orders an item relative to the
/// probe (`Less` meaning the item sorts before the probe).
pub fn sorted_search_by<T, F>(items: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let (mut low, mut high) = (0, items.len());

    while low < high {
        let mid = low + (high - low) / 2;
        match compare(&items[mid]) {
            Ordering::Equal => return Some(mid),
            // the probe is larger, continue in [mid + 1, high)
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// Returns `true` if `probe` is present in the sorted `items`.
pub fn sorted_search<T: Ord>(items: &[T], probe: &T) -> bool {
    find_index(items, probe, Identity).is_some()
}

/// Like [`sorted_search`], calling `visitor(item, index)` once on a match.
///
/// ```
/// use sequence_immutable::sorted_search_with;
///
/// let mut seen = None;
/// assert!(sorted_search_with(&[10, 20, 30], &20, |item, index| seen = Some((*item, index))));
/// assert_eq!(seen, Some((20, 1)));
/// ```
pub fn sorted_search_with<T, V>(items: &[T], probe: &T, visitor: V) -> bool
where
    T: Ord,
    V: FnOnce(&T, usize),
{
    sorted_search_by_key(items, probe, Identity, visitor)
}

/// Searches by extracted key, calling `visitor(item, index)` once on a match.
pub fn sorted_search_by_key<T, E, V>(items: &[T], probe: &E::Key, extractor: E, visitor: V) -> bool
where
    E: KeyExtractor<T>,
    E::Key: Ord,
    V: FnOnce(&T, usize),
{
    match find_index(items, probe, extractor) {
        Some(index) => {
            visitor(&items[index], index);
            true
        }
        None => false,
    }
}

/// Searches map-like `(key, value)` pairs sorted by key.
///
/// The visitor receives the whole matched entry and its position.
pub fn sorted_map_search<K, V, F>(pairs: &[(K, V)], key: &K, visitor: F) -> bool
where
    K: Ord,
    F: FnOnce(&(K, V), usize),
{
    sorted_search_by_key(pairs, key, First, visitor)
}
