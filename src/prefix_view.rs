//! Prefix view into a prefix tree.
//!
//! This module provides the `PrefixView` type, which gives access to the
//! entries of a tree that start with a given prefix, and `PrefixIter`, the
//! depth-first iterator shared with [`PrefixTree::iter`].

use std::fmt;
use std::hash::Hash;

use crate::node::TrieNode;
use crate::trie::PrefixTree;
use crate::util::starts_with;

/// A lightweight view into the subtree reached through a prefix.
///
/// The view borrows its tree; locating the subtree happens once, when the
/// view is created.
///
/// # Examples
///
/// ```
/// use sequence_immutable::PrefixTree;
///
/// let tree = PrefixTree::build(&["far", "fart", "fast", "gold"]).unwrap();
///
/// let view = tree.view_prefix("far");
/// assert_eq!(view.len(), 2);
/// assert!(view.contains("fart"));
/// assert!(!view.contains("fast"));
/// assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec!["far", "fart"]);
/// ```
pub struct PrefixView<'a, S, T> {
    /// The source tree for this view
    tree: &'a PrefixTree<S, T>,

    /// The symbols defining this view
    prefix: Vec<S>,

    /// The node at the end of the prefix, if the prefix exists
    node: Option<&'a TrieNode<S, T>>,
}

/// A depth-first iterator over tree entries in lexicographic order.
///
/// A branch yields the entry ending at it before any entry below it, and
/// visits its children in ascending symbol order.
pub struct PrefixIter<'a, S, T> {
    /// Nodes still to visit; the next one is on top
    stack: Vec<&'a TrieNode<S, T>>,
}

impl<'a, S: Ord, T> PrefixView<'a, S, T> {
    /// Creates a new view of `tree` for the given prefix.
    pub fn new(tree: &'a PrefixTree<S, T>, prefix: Vec<S>) -> Self {
        let node = find_node(tree.root(), &prefix);

        PrefixView { tree, prefix, node }
    }

    /// Returns the prefix of this view.
    pub fn prefix(&self) -> &[S] {
        &self.prefix
    }

    /// Returns the underlying tree.
    pub fn tree(&self) -> &'a PrefixTree<S, T> {
        self.tree
    }

    /// Returns whether some entry starts with the prefix.
    pub fn exists(&self) -> bool {
        self.node.is_some()
    }

    /// Returns the number of entries that start with the prefix.
    pub fn len(&self) -> usize {
        self.node.map_or(0, TrieNode::subtree_size)
    }

    /// Returns whether this view contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the node reached through the prefix.
    pub fn node(&self) -> Option<&'a TrieNode<S, T>> {
        self.node
    }

    /// Checks if `query` is an entry of the tree starting with the prefix.
    pub fn contains<Q>(&self, query: &Q) -> bool
    where
        Q: AsRef<[S]> + ?Sized,
    {
        self.get(query).is_some()
    }

    /// Gets the entry equal to `query` if it lies inside this view.
    pub fn get<Q>(&self, query: &Q) -> Option<&'a T>
    where
        Q: AsRef<[S]> + ?Sized,
    {
        let query = query.as_ref();
        if !starts_with(query, &self.prefix) {
            return None;
        }

        self.tree.get(query)
    }

    /// Returns an iterator over the entries of this view in lexicographic order.
    pub fn iter(&self) -> PrefixIter<'a, S, T> {
        PrefixIter::new(self.node)
    }
}

// Walks `prefix` down from `root`; running past a terminal means no entry continues.
fn find_node<'a, S: Ord, T>(root: &'a TrieNode<S, T>, prefix: &[S]) -> Option<&'a TrieNode<S, T>> {
    prefix.iter().try_fold(root, |node, symbol| {
        node.as_branch().and_then(|branch| branch.child(symbol))
    })
}

impl<'a, S, T> PrefixIter<'a, S, T> {
    pub(crate) fn new(start: Option<&'a TrieNode<S, T>>) -> Self {
        PrefixIter {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, S, T> Iterator for PrefixIter<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                TrieNode::Terminal(tag) => return Some(tag),
                TrieNode::Branch(branch) => {
                    // reversed so the smallest symbol is popped first
                    self.stack
                        .extend(branch.children().iter().rev().map(|(_, child)| child));

                    if let Some(tag) = branch.terminal() {
                        return Some(tag);
                    }
                }
            }
        }

        None
    }
}

impl<'a, S, T> fmt::Debug for PrefixView<'a, S, T>
where
    S: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("node", &self.node)
            .finish()
    }
}

// Views compare by the subtree they reach, regardless of tree or prefix.
impl<'a, S, T> PartialEq for PrefixView<'a, S, T>
where
    S: Hash + Eq,
    T: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => {
                std::ptr::eq(lhs, rhs)
                    || (lhs.structural_hash() == rhs.structural_hash() && lhs == rhs)
            }
            _ => false,
        }
    }
}

impl<'a, S, T> Eq for PrefixView<'a, S, T>
where
    S: Hash + Eq,
    T: Hash + Eq,
{
}

impl<'a, 'v, S: Ord, T> IntoIterator for &'v PrefixView<'a, S, T> {
    type Item = &'a T;
    type IntoIter = PrefixIter<'a, S, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
