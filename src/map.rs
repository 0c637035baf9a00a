//! A sorted, immutable key-value map backed by a [`Sequence`] of pairs.

use std::iter::FromIterator;

use tracing::debug;

use crate::compare::{ByKey, Less};
use crate::key::First;
use crate::search::{find_index, sorted_map_search};
use crate::sequence::Sequence;
use crate::sort::{first_unsorted, map_sort, merge_by};
use crate::{Error, Result};

const LOG_TARGET: &str = "sequence_immutable::map";

/// An immutable map whose entries are kept strictly ascending by key.
///
/// Lookups are binary searches; updates return a new map and leave the
/// original untouched.
///
/// # Examples
///
/// ```
/// use sequence_immutable::SequenceMap;
///
/// let map = SequenceMap::from_pairs(vec![(3, "three"), (1, "one"), (2, "two")]).unwrap();
///
/// assert_eq!(map.get(&2), Some(&"two"));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// let updated = map.insert(4, "four");
/// assert_eq!(updated.len(), 4);
/// assert_eq!(map.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceMap<K, V> {
    entries: Sequence<(K, V)>,
}

impl<K, V> SequenceMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        SequenceMap {
            entries: Sequence::new(),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in ascending key order.
    pub fn entries(&self) -> &Sequence<(K, V)> {
        &self.entries
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K: Ord, V> SequenceMap<K, V> {
    /// Wraps entries that are already strictly ascending by key.
    pub fn from_sorted(entries: Sequence<(K, V)>) -> Result<Self> {
        let by_key = ByKey::new(First);
        if let Some(index) = first_unsorted(entries.as_slice(), &by_key) {
            return Err(Error::Unsorted { index });
        }
        if let Some(index) = entries
            .as_slice()
            .windows(2)
            .position(|pair| pair[0].0 == pair[1].0)
        {
            return Err(Error::DuplicateEntry { index: index + 1 });
        }

        debug!(target: LOG_TARGET, entries = entries.len(), "Built sequence map");
        Ok(SequenceMap { entries })
    }

    /// Returns the position of `key` among the entries.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        find_index(self.entries.as_slice(), key, First)
    }

    /// Returns the entry stored under `key`.
    pub fn get_entry(&self, key: &K) -> Option<&(K, V)> {
        self.index_of(key).map(|index| &self.entries[index])
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns `true` if the map has an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    /// Looks up `key`, calling `visitor(entry, index)` once if it is present.
    pub fn search<F>(&self, key: &K, visitor: F) -> bool
    where
        F: FnOnce(&(K, V), usize),
    {
        sorted_map_search(self.entries.as_slice(), key, visitor)
    }
}

impl<K: Ord + Clone, V: Clone> SequenceMap<K, V> {
    /// Builds a map from unordered pairs.
    ///
    /// Returns [`Error::DuplicateEntry`] if two pairs share a key.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs: Vec<(K, V)> = pairs.into_iter().collect();
        Self::from_sorted(map_sort(&pairs))
    }

    /// Returns a new map with `key` bound to `value`, replacing any previous value.
    pub fn insert(&self, key: K, value: V) -> Self {
        let entries = match self.index_of(&key) {
            Some(index) => {
                let mut entries = self.entries.to_vec();
                entries[index] = (key, value);
                Sequence::from(entries)
            }
            None => merge_by(
                self.entries.as_slice(),
                &[(key, value)],
                &ByKey::with_comparator(First, Less),
            ),
        };

        SequenceMap { entries }
    }

    /// Returns a new map without `key`, together with the removed value.
    pub fn remove(&self, key: &K) -> (Self, Option<V>) {
        match self.index_of(key) {
            Some(index) => {
                let removed = self.entries[index].1.clone();
                let entries = self
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(position, _)| *position != index)
                    .map(|(_, entry)| entry.clone())
                    .collect();
                (SequenceMap { entries }, Some(removed))
            }
            None => (self.clone(), None),
        }
    }
}

impl<K, V> Default for SequenceMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> FromIterator<(K, V)> for SequenceMap<K, V> {
    /// Collects pairs into a map; on duplicate keys the first pair wins.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let pairs: Vec<(K, V)> = iter.into_iter().collect();
        let mut entries: Vec<(K, V)> = Vec::with_capacity(pairs.len());

        // the sort is stable, so the first occurrence of a key leads its run
        for entry in map_sort(&pairs).iter() {
            match entries.last() {
                Some((last, _)) if *last == entry.0 => {}
                _ => entries.push(entry.clone()),
            }
        }

        SequenceMap {
            entries: Sequence::from(entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled() -> Vec<(usize, String)> {
        [0usize, 8, 9, 6, 7, 5, 4, 1, 3, 2]
            .iter()
            .map(|&k| (k, format!("dummy {}", k)))
            .collect()
    }

    #[test]
    fn test_from_pairs_sorts() {
        let map = SequenceMap::from_pairs(shuffled()).unwrap();

        assert_eq!(map.len(), 10);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_pairs_rejects_duplicates() {
        let result = SequenceMap::from_pairs(vec![(1, 'a'), (0, 'b'), (1, 'c')]);
        assert_eq!(result, Err(Error::DuplicateEntry { index: 2 }));
    }

    #[test]
    fn test_from_sorted_rejects_unsorted() {
        let entries = Sequence::from(vec![(1, 'a'), (0, 'b')]);
        assert_eq!(
            SequenceMap::from_sorted(entries),
            Err(Error::Unsorted { index: 1 })
        );
    }

    #[test]
    fn test_get_and_contains() {
        let map = SequenceMap::from_pairs(shuffled()).unwrap();

        for key in 0..10 {
            assert_eq!(map.get(&key), Some(&format!("dummy {}", key)));
            assert!(map.contains_key(&key));
        }
        assert_eq!(map.get(&10), None);
        assert!(!map.contains_key(&10));
    }

    #[test]
    fn test_search_visits_entry_and_index() {
        let map = SequenceMap::from_pairs(shuffled()).unwrap();

        for key in 0..10 {
            let mut visited = None;
            assert!(map.search(&key, |entry, index| visited = Some((entry.0, index))));
            assert_eq!(visited, Some((key, key)));
        }
        assert!(!map.search(&10, |_, _| panic!("visitor called on a miss")));
    }

    #[test]
    fn test_insert_is_persistent() {
        let map = SequenceMap::from_pairs(vec![(1, "one"), (3, "three")]).unwrap();

        let with_two = map.insert(2, "two");
        assert_eq!(with_two.values().copied().collect::<Vec<_>>(), vec!["one", "two", "three"]);

        let replaced = with_two.insert(2, "deux");
        assert_eq!(replaced.get(&2), Some(&"deux"));
        assert_eq!(replaced.len(), 3);

        assert_eq!(map.len(), 2);
        assert_eq!(with_two.get(&2), Some(&"two"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let map = SequenceMap::from_pairs(vec![(1, "one"), (2, "two"), (3, "three")]).unwrap();

        let replaced = map.insert(2, "deux");
        assert_eq!(
            replaced.entries().as_slice(),
            &[(1, "one"), (2, "deux"), (3, "three")]
        );
        assert_eq!(map.get(&2), Some(&"two"));
    }

    #[test]
    fn test_from_sorted_reports_first_violation() {
        let unsorted = Sequence::from(vec![(1, 'a'), (1, 'b'), (0, 'c')]);
        assert_eq!(
            SequenceMap::from_sorted(unsorted),
            Err(Error::Unsorted { index: 2 })
        );

        let repeated = Sequence::from(vec![(0, 'a'), (1, 'b'), (1, 'c')]);
        assert_eq!(
            SequenceMap::from_sorted(repeated),
            Err(Error::DuplicateEntry { index: 2 })
        );
    }

    #[test]
    fn test_remove_is_persistent() {
        let map = SequenceMap::from_pairs(vec![(1, "one"), (2, "two")]).unwrap();

        let (smaller, removed) = map.remove(&1);
        assert_eq!(removed, Some("one"));
        assert_eq!(smaller.len(), 1);
        assert_eq!(smaller.get(&1), None);

        let (same, removed) = map.remove(&5);
        assert_eq!(removed, None);
        assert_eq!(same, map);
    }

    #[test]
    fn test_collect_keeps_first_duplicate() {
        let map: SequenceMap<u8, char> = vec![(2, 'x'), (1, 'a'), (2, 'y')].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&2), Some(&'x'));
    }
}
