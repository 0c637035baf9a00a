//! Grouping of sorted sequences into runs of equal keys.
//!
//! Runs are windows into the input sequence and share its storage, so
//! grouping never clones elements unless a collected group is requested.

use std::iter::FromIterator;

use crate::sequence::Sequence;

/// A maximal run of contiguous elements sharing `key`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, T> {
    /// The key shared by every element of the run
    pub key: K,

    /// The elements of the run, in input order
    pub run: Sequence<T>,
}

/// The result of a filtered grouping.
///
/// `collected` stands in front of `groups`: it holds the elements pulled out by
/// the filter, or `None` when nothing matched.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredGroups<K, T, C> {
    /// Elements selected by the filter, gathered by the collector type `C`
    pub collected: Option<C>,

    /// The remaining `(key, run)` groups, in input order
    pub groups: Sequence<Group<K, T>>,
}

/// Splits a sorted sequence into runs of elements with equal keys.
///
/// # Examples
///
/// ```
/// use sequence_immutable::{group_by, Sequence};
///
/// let words = Sequence::from(vec!["far", "fast", "gold", "good"]);
/// let groups = group_by(&words, |w| w.as_bytes()[0]);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].key, b'f');
/// assert_eq!(groups[1].run.as_slice(), &["gold", "good"]);
/// ```
pub fn group_by<T, K, F>(sorted: &Sequence<T>, key_of: F) -> Sequence<Group<K, T>>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    Sequence::from(runs(sorted, key_of))
}

/// Groups a sorted sequence, pulling out whole runs that satisfy `run_predicate`.
///
/// The predicate sees each run once it is complete. Elements of matching runs
/// are gathered, in order, into the collector type `C`; the other runs are
/// returned as ordinary groups.
pub fn filtered_group_by<T, K, C, F, P>(
    sorted: &Sequence<T>,
    key_of: F,
    mut run_predicate: P,
) -> FilteredGroups<K, T, C>
where
    T: Clone,
    K: PartialEq,
    C: FromIterator<T>,
    F: FnMut(&T) -> K,
    P: FnMut(&Sequence<T>) -> bool,
{
    let (matched, kept): (Vec<_>, Vec<_>) = runs(sorted, key_of)
        .into_iter()
        .partition(|group| run_predicate(&group.run));

    let collected = if matched.is_empty() {
        None
    } else {
        Some(
            matched
                .iter()
                .flat_map(|group| group.run.iter().cloned())
                .collect(),
        )
    };

    FilteredGroups {
        collected,
        groups: Sequence::from(kept),
    }
}

/// Groups a sorted sequence after pulling out every element matching `exclude`.
///
/// Excluded elements are gathered, in order, into the collector type `C`;
/// runs that become empty disappear.
///
/// ```
/// use sequence_immutable::{group_by_excluding, Sequence};
///
/// let words = Sequence::from(vec!["far", "farther", "fast", "gold", "granite"]);
/// let filtered = group_by_excluding::<_, _, Vec<_>, _, _>(&words, |w| w.as_bytes()[0], |w| w.len() == 7);
///
/// assert_eq!(filtered.collected, Some(vec!["farther", "granite"]));
/// assert_eq!(filtered.groups[0].run.as_slice(), &["far", "fast"]);
/// assert_eq!(filtered.groups[1].run.as_slice(), &["gold"]);
/// ```
pub fn group_by_excluding<T, K, C, F, P>(
    sorted: &Sequence<T>,
    key_of: F,
    mut exclude: P,
) -> FilteredGroups<K, T, C>
where
    T: Clone,
    K: PartialEq,
    C: FromIterator<T>,
    F: FnMut(&T) -> K,
    P: FnMut(&T) -> bool,
{
    let (excluded, kept): (Vec<T>, Vec<T>) = sorted.iter().cloned().partition(|item| exclude(item));

    let collected = if excluded.is_empty() {
        None
    } else {
        Some(excluded.into_iter().collect())
    };

    FilteredGroups {
        collected,
        groups: group_by(&Sequence::from(kept), key_of),
    }
}

// Single linear scan: a run closes whenever the key changes or input ends.
fn runs<T, K, F>(sorted: &Sequence<T>, mut key_of: F) -> Vec<Group<K, T>>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut groups = Vec::new();
    let mut current: Option<(K, usize)> = None;

    for (index, item) in sorted.iter().enumerate() {
        let key = key_of(item);
        match current.take() {
            Some((run_key, start)) if run_key == key => current = Some((run_key, start)),
            Some((run_key, start)) => {
                groups.push(Group {
                    key: run_key,
                    run: sorted.window(start, index),
                });
                current = Some((key, index));
            }
            None => current = Some((key, index)),
        }
    }

    if let Some((key, start)) = current {
        groups.push(Group {
            key,
            run: sorted.window(start, sorted.len()),
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_words() -> Sequence<&'static str> {
        Sequence::from(vec![
            "far", "fart", "farther", "fast", "faster", "fastest", "fat", "fist", "gold", "good",
            "gooey", "granite", "great", "green", "grok", "groove",
        ])
    }

    fn first_letter(word: &&str) -> u8 {
        word.as_bytes()[0]
    }

    #[test]
    fn test_group_by_first_letter() {
        let words = sorted_words();
        let groups = group_by(&words, first_letter);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, b'f');
        assert_eq!(
            groups[0].run.as_slice(),
            &["far", "fart", "farther", "fast", "faster", "fastest", "fat", "fist"]
        );
        assert_eq!(groups[1].key, b'g');
        assert_eq!(
            groups[1].run.as_slice(),
            &["gold", "good", "gooey", "granite", "great", "green", "grok", "groove"]
        );
    }

    #[test]
    fn test_group_by_empty_and_single() {
        let empty: Sequence<u32> = Sequence::new();
        assert!(group_by(&empty, |v| *v).is_empty());

        let single = Sequence::from(vec![7u32]);
        let groups = group_by(&single, |v| *v);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].run.as_slice(), &[7]);
    }

    #[test]
    fn test_filtered_group_by_without_matches_equals_group_by() {
        let words = sorted_words();
        let filtered: FilteredGroups<_, _, Vec<_>> =
            filtered_group_by(&words, first_letter, |_| false);

        assert_eq!(filtered.collected, None);
        assert_eq!(filtered.groups, group_by(&words, first_letter));
    }

    #[test]
    fn test_filtered_group_by_sees_whole_runs() {
        let values = Sequence::from(vec![1, 1, 2, 3, 3, 3, 4, 4]);
        let mut seen = Vec::new();

        let filtered: FilteredGroups<_, _, Vec<_>> = filtered_group_by(
            &values,
            |v| *v,
            |run| {
                seen.push(run.len());
                run.len() >= 2
            },
        );

        assert_eq!(seen, vec![2, 1, 3, 2]);
        assert_eq!(filtered.collected, Some(vec![1, 1, 3, 3, 3, 4, 4]));
        assert_eq!(filtered.groups.len(), 1);
        assert_eq!(filtered.groups[0].key, 2);
    }

    #[test]
    fn test_group_by_excluding_length_seven() {
        let words = sorted_words();
        let filtered: FilteredGroups<_, _, Vec<_>> =
            group_by_excluding(&words, first_letter, |w| w.len() == 7);

        assert_eq!(
            filtered.collected,
            Some(vec!["farther", "fastest", "granite"])
        );
        assert_eq!(filtered.groups.len(), 2);
        assert_eq!(
            filtered.groups[0].run.as_slice(),
            &["far", "fart", "fast", "faster", "fat", "fist"]
        );
        assert_eq!(
            filtered.groups[1].run.as_slice(),
            &["gold", "good", "gooey", "great", "green", "grok", "groove"]
        );
    }

    #[test]
    fn test_group_by_excluding_everything() {
        let values = Sequence::from(vec![1, 2, 3]);
        let filtered: FilteredGroups<u32, u32, Vec<u32>> =
            group_by_excluding(&values, |v| *v, |_| true);

        assert_eq!(filtered.collected, Some(vec![1, 2, 3]));
        assert!(filtered.groups.is_empty());
    }
}
