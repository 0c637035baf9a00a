//! The prefix tree implementation.
//!
//! This module contains the `PrefixTree` type, built once from a sorted
//! dictionary of symbol sequences and read-only afterwards.

use std::hash::Hash;

use once_cell::sync::OnceCell;
use tracing::{debug, trace, warn};

use crate::compare::{Lexicographic, Less};
use crate::config::{BuildOptions, DuplicatePolicy};
use crate::group::group_by;
use crate::node::{Branch, TrieNode};
use crate::prefix_view::{PrefixIter, PrefixView};
use crate::sequence::Sequence;
use crate::sort::{first_unsorted, sort_by};
use crate::util::prefix_match;
use crate::{Error, Result};

const LOG_TARGET: &str = "sequence_immutable::trie";

/// An immutable prefix tree over dictionary entries of type `T`, each a
/// sequence of symbols `S`.
///
/// Every entry is stored as the tag of the node where it ends, so a
/// successful search hands back the original entry.
///
/// # Examples
///
/// ```
/// use sequence_immutable::PrefixTree;
///
/// let tree = PrefixTree::build(&["far", "fast", "fastest", "gold"]).unwrap();
///
/// assert!(tree.search("fastest"));
/// assert!(!tree.search("fas"));
/// assert_eq!(tree.get("gold"), Some(&"gold"));
/// ```
#[derive(Debug, Clone)]
pub struct PrefixTree<S, T> {
    /// The root node; always a branch
    pub(crate) root: TrieNode<S, T>,

    /// The number of entries stored in the tree
    size: usize,

    /// Structural hash of the root, computed on first comparison
    cached_hash: OnceCell<u64>,
}

impl<S, T> PrefixTree<S, T> {
    /// Creates an empty tree: a root branch with no children.
    ///
    /// ```
    /// use sequence_immutable::PrefixTree;
    ///
    /// let tree = PrefixTree::<u8, &str>::new();
    /// assert!(tree.is_empty());
    /// assert!(!tree.search("fat"));
    /// ```
    pub fn new() -> Self {
        PrefixTree {
            root: TrieNode::Branch(Branch::new()),
            size: 0,
            cached_hash: OnceCell::new(),
        }
    }

    /// Returns the number of entries stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode<S, T> {
        &self.root
    }
}

impl<S, T> PrefixTree<S, T>
where
    S: Ord + Clone,
    T: AsRef<[S]> + Clone,
{
    /// Builds a tree from entries sorted lexicographically, with default options.
    ///
    /// Fails on empty entries, unsorted input and duplicate entries.
    pub fn build(sorted: &[T]) -> Result<Self> {
        Self::build_with(sorted, &BuildOptions::default())
    }

    /// Builds a tree from entries sorted lexicographically.
    pub fn build_with(sorted: &[T], options: &BuildOptions) -> Result<Self> {
        let entries = Sequence::from(validate::<S, T>(sorted, options)?);
        let root = TrieNode::Branch(build_branch::<S, T>(&entries, 0));

        debug!(
            target: LOG_TARGET,
            entries = entries.len(),
            nodes = root.node_count(),
            "Built prefix tree"
        );

        Ok(PrefixTree {
            root,
            size: entries.len(),
            cached_hash: OnceCell::new(),
        })
    }

    /// Sorts `entries` lexicographically, then builds a tree from them.
    ///
    /// ```
    /// use sequence_immutable::{BuildOptions, PrefixTree};
    ///
    /// let tree = PrefixTree::from_unsorted(&["gooey", "fast", "far"], &BuildOptions::default()).unwrap();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec!["far", "fast", "gooey"]);
    /// ```
    pub fn from_unsorted(entries: &[T], options: &BuildOptions) -> Result<Self> {
        let sorted = sort_by(entries, &Lexicographic::<Less, S>::new(Less));
        Self::build_with(sorted.as_slice(), options)
    }
}

impl<S: Ord, T> PrefixTree<S, T> {
    /// Returns the entry equal to `query`, if the tree holds one.
    ///
    /// Only exact matches count: a query that stops short of an entry, or
    /// runs past one, is not found.
    pub fn get<Q>(&self, query: &Q) -> Option<&T>
    where
        Q: AsRef<[S]> + ?Sized,
    {
        let query = query.as_ref();
        let mut node = &self.root;

        for (cursor, symbol) in query.iter().enumerate() {
            let branch = match node {
                TrieNode::Branch(branch) => branch,
                TrieNode::Terminal(_) => {
                    trace!(target: LOG_TARGET, depth = cursor, "Query runs past a terminal");
                    return None;
                }
            };

            node = match branch.child(symbol) {
                Some(child) => child,
                None => {
                    trace!(target: LOG_TARGET, depth = cursor, "No branch for symbol");
                    return None;
                }
            };
        }

        node.tag()
    }

    /// Returns `true` if `query` is one of the entries.
    pub fn search<Q>(&self, query: &Q) -> bool
    where
        Q: AsRef<[S]> + ?Sized,
    {
        self.get(query).is_some()
    }

    /// Like [`PrefixTree::search`], calling `visitor` with the matched entry.
    ///
    /// ```
    /// use sequence_immutable::PrefixTree;
    ///
    /// let tree = PrefixTree::build(&["fast", "fastest"]).unwrap();
    ///
    /// let mut matched = None;
    /// assert!(tree.search_with("fastest", |tag| matched = Some(*tag)));
    /// assert_eq!(matched, Some("fastest"));
    /// ```
    pub fn search_with<Q, V>(&self, query: &Q, visitor: V) -> bool
    where
        Q: AsRef<[S]> + ?Sized,
        V: FnOnce(&T),
    {
        match self.get(query) {
            Some(tag) => {
                visitor(tag);
                true
            }
            None => false,
        }
    }

    /// Finds the longest entry that is a prefix of `query`.
    ///
    /// Returns the entry together with its length in symbols.
    ///
    /// ```
    /// use sequence_immutable::PrefixTree;
    ///
    /// let tree = PrefixTree::build(&["fast", "fastest"]).unwrap();
    ///
    /// assert_eq!(tree.longest_prefix("fastestest"), Some((&"fastest", 7)));
    /// assert_eq!(tree.longest_prefix("faster"), Some((&"fast", 4)));
    /// assert_eq!(tree.longest_prefix("fa"), None);
    /// ```
    pub fn longest_prefix<Q>(&self, query: &Q) -> Option<(&T, usize)>
    where
        Q: AsRef<[S]> + ?Sized,
    {
        let mut best = None;
        let mut node = &self.root;

        for (cursor, symbol) in query.as_ref().iter().enumerate() {
            let child = match node.as_branch().and_then(|branch| branch.child(symbol)) {
                Some(child) => child,
                None => break,
            };

            if let Some(tag) = child.tag() {
                best = Some((tag, cursor + 1));
            }
            node = child;
        }

        best
    }

    /// Creates a view of the entries starting with `prefix`.
    pub fn view_prefix<Q>(&self, prefix: &Q) -> PrefixView<'_, S, T>
    where
        Q: AsRef<[S]> + ?Sized,
        S: Clone,
    {
        PrefixView::new(self, prefix.as_ref().to_vec())
    }
}

impl<S, T> PrefixTree<S, T> {
    /// Iterates over all entries in lexicographic order.
    pub fn iter(&self) -> PrefixIter<'_, S, T> {
        PrefixIter::new(Some(&self.root))
    }

    /// Gets the structural hash of the tree, computing it once.
    pub fn structural_hash(&self) -> u64
    where
        S: Hash,
        T: Hash,
    {
        *self
            .cached_hash
            .get_or_init(|| self.root.structural_hash())
    }
}

impl<S, T> Default for PrefixTree<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S, T> IntoIterator for &'a PrefixTree<S, T> {
    type Item = &'a T;
    type IntoIter = PrefixIter<'a, S, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Hashes only rule out equality; a hash match is confirmed structurally.
impl<S, T> PartialEq for PrefixTree<S, T>
where
    S: Hash + Eq,
    T: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        if self.size != other.size {
            return false;
        }

        self.structural_hash() == other.structural_hash() && self.root == other.root
    }
}

impl<S, T> Eq for PrefixTree<S, T>
where
    S: Hash + Eq,
    T: Hash + Eq,
{
}

// Checks the build preconditions and applies the duplicate policy.
fn validate<S, T>(sorted: &[T], options: &BuildOptions) -> Result<Vec<T>>
where
    S: Ord,
    T: AsRef<[S]> + Clone,
{
    if let Some(index) = sorted.iter().position(|entry| entry.as_ref().is_empty()) {
        return Err(Error::EmptyEntry { index });
    }

    if options.verify_order {
        if let Some(index) = first_unsorted(sorted, &Lexicographic::<Less, S>::new(Less)) {
            return Err(Error::Unsorted { index });
        }
    }

    let mut entries: Vec<T> = Vec::with_capacity(sorted.len());

    // only neighbours are compared, so unverified input may keep scattered repeats
    for (index, entry) in sorted.iter().enumerate() {
        if let Some(previous) = entries.last() {
            let (symbols, previous) = (entry.as_ref(), previous.as_ref());
            let shared = prefix_match(symbols, 0, previous);
            if shared == symbols.len() && shared == previous.len() {
                match options.duplicates {
                    DuplicatePolicy::Reject => return Err(Error::DuplicateEntry { index }),
                    DuplicatePolicy::KeepFirst => {
                        warn!(target: LOG_TARGET, index, "Dropping duplicate dictionary entry");
                        continue;
                    }
                }
            }
        }

        entries.push(entry.clone());
    }

    Ok(entries)
}

// Builds the branch for `entries`, which all share their first `depth` symbols.
fn build_branch<S, T>(entries: &Sequence<T>, depth: usize) -> Branch<S, T>
where
    S: Ord + Clone,
    T: AsRef<[S]> + Clone,
{
    let mut branch = Branch::new();

    // sorted input puts the entry ending at this depth (key `None`) first
    for group in group_by(entries, |entry| entry.as_ref().get(depth).cloned()).iter() {
        let symbol = match &group.key {
            Some(symbol) => symbol.clone(),
            None => {
                if branch.terminal.is_none() {
                    branch.terminal = group.run.get(0).cloned();
                }
                continue;
            }
        };

        let child = match group.run.as_slice() {
            [only] if only.as_ref().len() == depth + 1 => TrieNode::Terminal(only.clone()),
            _ => TrieNode::Branch(build_branch(&group.run, depth + 1)),
        };

        branch.children.push((symbol, child));
    }

    branch
}
