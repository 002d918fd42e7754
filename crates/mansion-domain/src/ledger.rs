//! Clue ledger - an ordered search tree of discovered clues
//!
//! The ledger is an unbalanced binary search tree keyed by clue text. Its
//! shape follows insertion order; in-order traversal yields the clues
//! alphabetically. Inserting a clue that is already present changes nothing.

use crate::traits::ClueResolver;
use crate::ClueText;
use std::cmp::Ordering;

type Link = Option<Box<LedgerNode>>;

#[derive(Debug, Clone)]
struct LedgerNode {
    clue: ClueText,
    left: Link,
    right: Link,
}

/// Ordered set of the clues discovered during one exploration
#[derive(Debug, Clone, Default)]
pub struct ClueLedger {
    root: Link,
    len: usize,
}

impl ClueLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue
    ///
    /// Smaller keys descend left, greater keys descend right and an equal
    /// key leaves the tree untouched.
    pub fn insert(&mut self, clue: ClueText) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match clue.cmp(&node.clue) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return,
            };
        }
        *link = Some(Box::new(LedgerNode {
            clue,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// Whether `clue` has been recorded
    pub fn contains(&self, clue: &str) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of distinct clues
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no clue has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterate over the clues in ascending order
    ///
    /// The iterator is lazy; call `iter` again to restart.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(&self.root);
        iter
    }

    /// Count the clues that `resolver` attributes to `suspect`
    ///
    /// Clues the resolver does not know are not counted.
    pub fn count_for_suspect<R: ClueResolver + ?Sized>(&self, suspect: &str, resolver: &R) -> usize {
        self.iter()
            .filter(|clue| {
                resolver
                    .resolve(clue.as_str())
                    .is_some_and(|name| name.as_str() == suspect)
            })
            .count()
    }
}

impl<'a> IntoIterator for &'a ClueLedger {
    type Item = &'a ClueText;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`ClueLedger`]
pub struct Iter<'a> {
    stack: Vec<&'a LedgerNode>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut link: &'a Link) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ClueText;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        Some(&node.clue)
    }
}
