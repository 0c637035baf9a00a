//! Pluggable strict less-than relations.
//!
//! Every ordering-sensitive algorithm in this crate (sort, merge, group-by
//! validation, map construction) takes a [`Comparator`]. Plain closures
//! `Fn(&T, &T) -> bool` are comparators too.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::key::KeyExtractor;

/// A strict less-than relation over `T`.
///
/// Implementations must describe a strict weak order; anything else yields
/// unspecified (but never panicking) results from the algorithms using it.
pub trait Comparator<T: ?Sized> {
    /// Returns `true` if `lhs` orders strictly before `rhs`.
    fn less(&self, lhs: &T, rhs: &T) -> bool;

    /// Three-way comparison derived from [`Comparator::less`].
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        if self.less(lhs, rhs) {
            Ordering::Less
        } else if self.less(rhs, lhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// The natural ascending order of `Ord` types.
#[derive(Debug, Clone, Copy, Default)]
pub struct Less;

impl<T: Ord + ?Sized> Comparator<T> for Less {
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

/// The natural descending order of `Ord` types.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greater;

impl<T: Ord + ?Sized> Comparator<T> for Greater {
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        rhs < lhs
    }
}

/// Compares items by the keys an extractor pulls out of them.
///
/// ```
/// use sequence_immutable::{ByKey, Comparator, First};
///
/// let by_first = ByKey::new(First);
/// assert!(by_first.less(&(1, "z"), &(2, "a")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey<E, C = Less> {
    extractor: E,
    cmp: C,
}

impl<E> ByKey<E, Less> {
    /// Orders by extracted key using the key's natural order.
    pub fn new(extractor: E) -> Self {
        ByKey {
            extractor,
            cmp: Less,
        }
    }
}

impl<E, C> ByKey<E, C> {
    /// Orders by extracted key using `cmp` on the keys.
    pub fn with_comparator(extractor: E, cmp: C) -> Self {
        ByKey { extractor, cmp }
    }
}

impl<T, E, C> Comparator<T> for ByKey<E, C>
where
    E: KeyExtractor<T>,
    C: Comparator<E::Key>,
{
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        self.cmp
            .less(self.extractor.key(lhs), self.extractor.key(rhs))
    }
}

/// Element-wise ordering of symbol sequences.
///
/// Two sequences are compared symbol by symbol with the element comparator;
/// when one is a prefix of the other, the shorter orders first.
#[derive(Debug, Clone, Copy)]
pub struct Lexicographic<C, T> {
    cmp: C,
    _element: PhantomData<fn(&T)>,
}

impl<C, T> Lexicographic<C, T> {
    /// Creates a lexicographic order over sequences of `T`.
    pub fn new(cmp: C) -> Self {
        Lexicographic {
            cmp,
            _element: PhantomData,
        }
    }
}

impl<C: Default, T> Default for Lexicographic<C, T> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<S, T, C> Comparator<S> for Lexicographic<C, T>
where
    S: AsRef<[T]> + ?Sized,
    C: Comparator<T>,
{
    fn less(&self, lhs: &S, rhs: &S) -> bool {
        let (lhs, rhs) = (lhs.as_ref(), rhs.as_ref());

        for (a, b) in lhs.iter().zip(rhs.iter()) {
            if self.cmp.less(a, b) {
                return true;
            }
            if self.cmp.less(b, a) {
                return false;
            }
        }

        lhs.len() < rhs.len()
    }
}
