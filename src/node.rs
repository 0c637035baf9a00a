//! Node types of the prefix tree.
//!
//! A tree is a `TrieNode::Branch` root whose children are keyed by symbol.
//! Every symbol position gets its own level; nodes own their children, and
//! nothing is shared between subtrees.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::search::sorted_search_by;

/// A node of the prefix tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrieNode<S, T> {
    /// Marks the end of a dictionary entry with no longer entries below it
    Terminal(T),

    /// Symbol-keyed children, plus the entry ending exactly here if any
    Branch(Branch<S, T>),
}

/// An inner node mapping symbols to child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Branch<S, T> {
    /// The entry whose last symbol leads to this branch, when longer entries continue past it
    pub(crate) terminal: Option<T>,

    /// Children sorted by symbol
    pub(crate) children: Vec<(S, TrieNode<S, T>)>,
}

impl<S, T> Branch<S, T> {
    /// Creates a branch with no terminal and no children.
    pub fn new() -> Self {
        Branch {
            terminal: None,
            children: Vec::new(),
        }
    }

    /// Returns the entry ending at this branch, if any.
    pub fn terminal(&self) -> Option<&T> {
        self.terminal.as_ref()
    }

    /// Returns the children in ascending symbol order.
    pub fn children(&self) -> &[(S, TrieNode<S, T>)] {
        &self.children
    }

    /// Returns whether this branch has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of entries stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let own = if self.terminal.is_some() { 1 } else { 0 };
        own + self
            .children
            .iter()
            .map(|(_, child)| child.subtree_size())
            .sum::<usize>()
    }

    /// Finds the child reached through `symbol` by binary search.
    pub fn child(&self, symbol: &S) -> Option<&TrieNode<S, T>>
    where
        S: Ord,
    {
        sorted_search_by(&self.children, |(key, _)| key.cmp(symbol))
            .map(|index| &self.children[index].1)
    }
}

impl<S, T> Default for Branch<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> TrieNode<S, T> {
    /// Returns the entry that ends exactly at this node, if any.
    pub fn tag(&self) -> Option<&T> {
        match self {
            TrieNode::Terminal(tag) => Some(tag),
            TrieNode::Branch(branch) => branch.terminal(),
        }
    }

    /// Returns the branch behind this node, or `None` for a terminal.
    pub fn as_branch(&self) -> Option<&Branch<S, T>> {
        match self {
            TrieNode::Terminal(_) => None,
            TrieNode::Branch(branch) => Some(branch),
        }
    }

    /// Returns `true` for terminal markers.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrieNode::Terminal(_))
    }

    /// Returns the number of entries stored in this subtree
    pub fn subtree_size(&self) -> usize {
        match self {
            TrieNode::Terminal(_) => 1,
            TrieNode::Branch(branch) => branch.subtree_size(),
        }
    }

    /// Returns the number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        match self {
            TrieNode::Terminal(_) => 1,
            TrieNode::Branch(branch) => {
                1 + branch
                    .children
                    .iter()
                    .map(|(_, child)| child.node_count())
                    .sum::<usize>()
            }
        }
    }

    /// Calculates the structural hash of this subtree without caching
    pub fn structural_hash(&self) -> u64
    where
        S: Hash,
        T: Hash,
    {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
