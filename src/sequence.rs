//! The immutable sequence container.
//!
//! `Sequence<T>` is a fixed, ordered collection whose storage is shared via `Arc`.
//! All operations return a new sequence; slicing operations (`head`, `tail`,
//! `slice`, `split`) share the underlying storage and run in constant time.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;
use std::sync::Arc;

use crate::{Error, Result};

/// An immutable, ordered, fixed-length collection with structural sharing.
///
/// # Examples
///
/// ```
/// use sequence_immutable::Sequence;
///
/// let seq = Sequence::from(vec![0, 1, 2, 3, 4, 5, 6]);
/// let (front, back) = seq.split(4).unwrap();
///
/// assert_eq!(front.as_slice(), &[0, 1, 2, 3]);
/// assert_eq!(back.as_slice(), &[4, 5, 6]);
///
/// // the original is untouched
/// assert_eq!(seq.len(), 7);
/// ```
pub struct Sequence<T> {
    /// Backing storage, possibly shared with other sequences
    items: Arc<[T]>,

    /// Window into `items` visible through this sequence
    start: usize,
    end: usize,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            items: Arc::clone(&self.items),
            start: self.start,
            end: self.end,
        }
    }
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Returns the number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the visible elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items[self.start..self.end]
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_immutable::{Error, Sequence};
    ///
    /// let seq = Sequence::from(vec!['a', 'b']);
    /// assert_eq!(seq.at(1), Ok(&'b'));
    /// assert_eq!(seq.at(2), Err(Error::IndexOutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Returns the first `n` elements.
    pub fn head(&self, n: usize) -> Result<Self> {
        self.slice(0, n)
    }

    /// Returns everything after the first `n` elements.
    pub fn tail(&self, n: usize) -> Result<Self> {
        self.slice(n, self.len())
    }

    /// Returns the elements in `begin..end`, sharing storage with `self`.
    pub fn slice(&self, begin: usize, end: usize) -> Result<Self> {
        if begin > end || end > self.len() {
            return Err(Error::InvalidRange {
                begin,
                end,
                len: self.len(),
            });
        }

        Ok(self.window(begin, end))
    }

    // Callers guarantee `begin <= end <= self.len()`.
    pub(crate) fn window(&self, begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end && end <= self.len());
        Sequence {
            items: Arc::clone(&self.items),
            start: self.start + begin,
            end: self.start + end,
        }
    }

    /// Splits the sequence into `[0, at)` and `[at, len)`.
    pub fn split(&self, at: usize) -> Result<(Self, Self)> {
        Ok((self.slice(0, at)?, self.slice(at, self.len())?))
    }

    /// Returns the position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    /// Returns `true` if some element equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Returns the first element satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    /// Maps every element through `f` into a new sequence.
    pub fn transform<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }
}

impl<T: Clone> Sequence<T> {
    /// Concatenates `self` and `other` into a new sequence.
    pub fn cat(&self, other: &Self) -> Self {
        Self::concat(&[self.clone(), other.clone()])
    }

    /// Concatenates all `parts`, in order.
    pub fn concat(parts: &[Self]) -> Self {
        let total = parts.iter().map(Sequence::len).sum();
        let mut items = Vec::with_capacity(total);
        for part in parts {
            items.extend_from_slice(part.as_slice());
        }
        Self::from(items)
    }

    /// Returns a new sequence with `items` placed before the current elements.
    pub fn push_front<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().chain(self.iter().cloned()).collect()
    }

    /// Returns a new sequence with `items` placed after the current elements.
    pub fn push_back<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.iter().cloned().chain(items).collect()
    }

    /// Returns a new sequence with the element at `index` replaced by `item`.
    pub fn replace_at(&self, index: usize, item: T) -> Result<Self> {
        self.at(index)?;

        let mut items = self.to_vec();
        items[index] = item;
        Ok(Self::from(items))
    }

    /// Copies the visible elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        let end = items.len();
        Sequence {
            items: Arc::from(items),
            start: 0,
            end,
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lst() -> Sequence<&'static str> {
        Sequence::from(vec![
            "int", "double", "bool", "void", "float", "char", "unsigned",
        ])
    }

    #[test]
    fn test_at_and_get() {
        let seq: Sequence<usize> = (0..7).collect();

        for i in 0..7 {
            assert_eq!(seq.at(i), Ok(&i));
            assert_eq!(seq.get(i), Some(&i));
        }
        assert_eq!(seq.get(7), None);
        assert_eq!(seq.at(7), Err(Error::IndexOutOfBounds { index: 7, len: 7 }));
    }

    #[test]
    fn test_cat() {
        let sq1: Sequence<usize> = (0..3).collect();
        let sq2: Sequence<usize> = (0..4).collect();

        let joined = sq1.cat(&sq2);
        assert_eq!(joined.as_slice(), &[0, 1, 2, 0, 1, 2, 3]);
        assert_eq!(joined.len(), sq1.len() + sq2.len());

        // concatenating a single part is the identity
        assert_eq!(Sequence::concat(&[sq1.clone()]), sq1);
    }

    #[test]
    fn test_empty() {
        let empty: Sequence<u8> = Sequence::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(!lst().is_empty());
    }

    #[test]
    fn test_head_and_tail() {
        let seq = lst();

        assert_eq!(seq.tail(0).unwrap(), seq);
        assert_eq!(
            seq.tail(3).unwrap().as_slice(),
            &["void", "float", "char", "unsigned"]
        );
        assert!(seq.tail(seq.len()).unwrap().is_empty());

        assert!(seq.head(0).unwrap().is_empty());
        assert_eq!(seq.head(3).unwrap().as_slice(), &["int", "double", "bool"]);
        assert_eq!(seq.head(seq.len()).unwrap(), seq);

        assert!(seq.head(8).is_err());
    }

    #[test]
    fn test_slice() {
        let seq: Sequence<usize> = (0..7).collect();

        assert_eq!(seq.slice(0, 7).unwrap(), seq);
        assert_eq!(seq.slice(4, 7).unwrap().as_slice(), &[4, 5, 6]);
        assert_eq!(seq.slice(3, 6).unwrap().as_slice(), &[3, 4, 5]);
        assert!(seq.slice(4, 4).unwrap().is_empty());
        assert_eq!(seq.slice(4, 5).unwrap().as_slice(), &[4]);
        assert!(seq.slice(7, 7).unwrap().is_empty());

        assert_eq!(
            seq.slice(5, 4),
            Err(Error::InvalidRange {
                begin: 5,
                end: 4,
                len: 7
            })
        );
    }

    #[test]
    fn test_nested_slice_shares_storage() {
        let seq: Sequence<usize> = (0..10).collect();
        let inner = seq.slice(2, 8).unwrap().slice(1, 3).unwrap();

        assert_eq!(inner.as_slice(), &[3, 4]);
        assert!(Arc::ptr_eq(&seq.items, &inner.items));
    }

    #[test]
    fn test_split() {
        let seq = lst();

        let (front, back) = seq.split(0).unwrap();
        assert!(front.is_empty());
        assert_eq!(back, seq);

        let (front, back) = seq.split(4).unwrap();
        assert_eq!(front.as_slice(), &["int", "double", "bool", "void"]);
        assert_eq!(back.as_slice(), &["float", "char", "unsigned"]);

        let (front, back) = seq.split(seq.len()).unwrap();
        assert_eq!(front, seq);
        assert!(back.is_empty());
    }

    #[test]
    fn test_index_of_and_contains() {
        let seq = lst();

        assert_eq!(seq.index_of(&"int"), Some(0));
        assert_eq!(seq.index_of(&"void"), Some(3));
        assert_eq!(seq.index_of(&"unsigned"), Some(6));
        assert_eq!(seq.index_of(&"void *"), None);

        assert!(seq.contains(&"float"));
        assert!(!seq.contains(&"void *"));

        let shuffled = Sequence::from(vec![0, 8, 9, 6, 7, 5, 4, 1, 3, 2]);
        assert_eq!(shuffled.index_of(&9), Some(2));
        assert_eq!(shuffled.index_of(&2), Some(9));
    }

    #[test]
    fn test_find() {
        let seq = lst();
        assert_eq!(seq.find(|name| name.starts_with('f')), Some(&"float"));
        assert_eq!(seq.find(|name| name.is_empty()), None);
    }

    #[test]
    fn test_replace_at() {
        let seq: Sequence<usize> = (0..7).collect();

        let replaced = seq.replace_at(0, 100).unwrap();
        assert_eq!(replaced.as_slice(), &[100, 1, 2, 3, 4, 5, 6]);

        let replaced = seq.replace_at(6, 100).unwrap();
        assert_eq!(replaced.as_slice(), &[0, 1, 2, 3, 4, 5, 100]);

        // original unchanged
        assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
        assert!(seq.replace_at(7, 100).is_err());
    }

    #[test]
    fn test_push() {
        let seq = lst();

        assert_eq!(seq.push_front(Vec::new()), seq);
        assert_eq!(seq.push_back(Vec::new()), seq);

        let front = seq.push_front(vec!["void *", "int *", "char *"]);
        assert_eq!(front.len(), 10);
        assert_eq!(front.head(4).unwrap().as_slice(), &["void *", "int *", "char *", "int"]);

        let back = seq.push_back(vec!["void *"]);
        assert_eq!(back.get(7), Some(&"void *"));
        assert_eq!(back.head(7).unwrap(), seq);
    }

    #[test]
    fn test_transform() {
        let seq: Sequence<usize> = (0..4).collect();
        let doubled = seq.transform(|v| v * 2);
        assert_eq!(doubled.as_slice(), &[0, 2, 4, 6]);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let far: Sequence<char> = "far".chars().collect();
        let fart: Sequence<char> = "fart".chars().collect();
        let fast: Sequence<char> = "fast".chars().collect();

        assert!(far < fart);
        assert!(fart < fast);
        assert_eq!(far.slice(0, 2).unwrap(), fast.slice(0, 2).unwrap());
    }
}
