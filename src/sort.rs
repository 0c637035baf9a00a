//! Merge sort, merge and index sort over immutable sequences.
//!
//! None of these functions touch their input: each returns a freshly built
//! [`Sequence`]. The sort is a top-down merge sort; ties are resolved by taking
//! the left element first, which makes every sort here stable.

use tracing::trace;

use crate::compare::{ByKey, Comparator, Less};
use crate::key::{First, KeyExtractor};
use crate::sequence::Sequence;

const LOG_TARGET: &str = "sequence_immutable::sort";

/// Sorts `items` by their natural order.
///
/// # Examples
///
/// ```
/// use sequence_immutable::sort;
///
/// let sorted = sort(&[0, 8, 9, 6, 7, 5, 4, 1, 3, 2]);
/// assert_eq!(sorted.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn sort<T: Ord + Clone>(items: &[T]) -> Sequence<T> {
    sort_by(items, &Less)
}

/// Sorts `items` so that no adjacent pair `(a, b)` has `cmp.less(b, a)`.
pub fn sort_by<T, C>(items: &[T], cmp: &C) -> Sequence<T>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    Sequence::from(merge_sort(items, &mut |a: &T, b: &T| cmp.less(a, b)))
}

/// Sorts `items` by the natural order of the keys `extractor` yields.
pub fn sort_by_key<T, E>(items: &[T], extractor: E) -> Sequence<T>
where
    T: Clone,
    E: KeyExtractor<T>,
    E::Key: Ord,
{
    sort_by(items, &ByKey::new(extractor))
}

/// Sorts map-like `(key, value)` pairs by key.
pub fn map_sort<K: Ord + Clone, V: Clone>(pairs: &[(K, V)]) -> Sequence<(K, V)> {
    sort_by_key(pairs, First)
}

/// Returns the permutation of positions that orders `items` under `cmp`.
///
/// Items are never moved or cloned, which makes this the variant of choice
/// for heavyweight elements.
///
/// ```
/// use sequence_immutable::{index_sort, Less};
///
/// let words = ["banana", "apple", "cherry"];
/// assert_eq!(index_sort(&words, &Less).as_slice(), &[1, 0, 2]);
/// ```
pub fn index_sort<T, C>(items: &[T], cmp: &C) -> Sequence<usize>
where
    C: Comparator<T> + ?Sized,
{
    let positions: Vec<usize> = (0..items.len()).collect();
    let sorted = merge_sort(&positions, &mut |a: &usize, b: &usize| {
        cmp.less(&items[*a], &items[*b])
    });
    Sequence::from(sorted)
}

/// Builds a new sequence holding `items[indices[0]], items[indices[1]], ...`.
///
/// Positions past the end of `items` are skipped.
pub fn permute<T: Clone>(items: &[T], indices: &[usize]) -> Sequence<T> {
    indices
        .iter()
        .filter_map(|&index| items.get(index).cloned())
        .collect()
}

/// Merges two sequences already sorted by their natural order.
///
/// ```
/// use sequence_immutable::merge;
///
/// let merged = merge(&[0, 2, 4, 6, 8], &[1, 3, 5, 7, 9]);
/// assert_eq!(merged.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Sequence<T> {
    merge_by(left, right, &Less)
}

/// Merges two sequences already sorted under `cmp` in linear time.
pub fn merge_by<T, C>(left: &[T], right: &[T], cmp: &C) -> Sequence<T>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    merge_into(left, right, &mut merged, &mut |a: &T, b: &T| cmp.less(a, b));
    Sequence::from(merged)
}

/// Returns `true` if no adjacent pair of `items` is out of order under `cmp`.
pub fn is_sorted_by<T, C>(items: &[T], cmp: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    first_unsorted(items, cmp).is_none()
}

/// Returns the position of the first item that orders before its predecessor.
pub(crate) fn first_unsorted<T, C>(items: &[T], cmp: &C) -> Option<usize>
where
    C: Comparator<T> + ?Sized,
{
    items
        .windows(2)
        .position(|pair| cmp.less(&pair[1], &pair[0]))
        .map(|index| index + 1)
}

// Top-down merge sort: split at the midpoint, sort both halves, merge.
fn merge_sort<T, F>(items: &[T], less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid], less);
    let right = merge_sort(&items[mid..], less);

    let mut merged = Vec::with_capacity(items.len());
    merge_into(&left, &right, &mut merged, less);
    merged
}

fn merge_into<T, F>(left: &[T], right: &[T], out: &mut Vec<T>, less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    trace!(
        target: LOG_TARGET,
        left = left.len(),
        right = right.len(),
        "Merging sorted runs"
    );

    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // take from the right only when strictly smaller, keeping ties left-biased
        if less(&right[j], &left[i]) {
            out.push(right[j].clone());
            j += 1;
        } else {
            out.push(left[i].clone());
            i += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}
