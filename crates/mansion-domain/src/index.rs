//! Suspect index - a chained hash table from clue text to suspect
//!
//! Each bucket holds a singly linked chain. New entries are pushed to the
//! front of their chain, so the latest entry for a key shadows older ones.

use crate::traits::ClueResolver;
use crate::{ClueText, DomainError, SuspectName};

/// Default number of buckets
pub const DEFAULT_BUCKETS: usize = 20;

type Chain = Option<Box<IndexEntry>>;

#[derive(Debug, Clone)]
struct IndexEntry {
    clue: ClueText,
    suspect: SuspectName,
    next: Chain,
}

/// Lookup table resolving discovered clues to suspects
#[derive(Debug, Clone)]
pub struct SuspectIndex {
    buckets: Vec<Chain>,
    len: usize,
}

impl SuspectIndex {
    /// Create an index with [`DEFAULT_BUCKETS`] buckets
    pub fn new() -> Self {
        Self {
            buckets: vec![None; DEFAULT_BUCKETS],
            len: 0,
        }
    }

    /// Create an index with a specific number of buckets
    ///
    /// # Errors
    /// Returns [`DomainError::NoBuckets`] when `buckets` is zero.
    pub fn with_buckets(buckets: usize) -> Result<Self, DomainError> {
        if buckets == 0 {
            return Err(DomainError::NoBuckets);
        }
        Ok(Self {
            buckets: vec![None; buckets],
            len: 0,
        })
    }

    /// Bucket for a key: sum of its bytes modulo the bucket count
    fn bucket(&self, clue: &str) -> usize {
        let sum = clue.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
        sum % self.buckets.len()
    }

    /// Record that `clue` implicates `suspect`
    pub fn insert(&mut self, clue: ClueText, suspect: SuspectName) {
        let slot = self.bucket(clue.as_str());
        let next = self.buckets[slot].take();
        self.buckets[slot] = Some(Box::new(IndexEntry {
            clue,
            suspect,
            next,
        }));
        self.len += 1;
    }

    /// Suspect recorded for `clue`, if any
    pub fn lookup(&self, clue: &str) -> Option<&SuspectName> {
        let mut entry = self.buckets[self.bucket(clue)].as_deref();
        while let Some(e) = entry {
            if e.clue.as_str() == clue {
                return Some(&e.suspect);
            }
            entry = e.next.as_deref();
        }
        None
    }

    /// Number of entries, shadowed ones included
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest chain
    pub fn longest_chain(&self) -> usize {
        self.buckets
            .iter()
            .map(|chain| {
                let mut len = 0;
                let mut entry = chain.as_deref();
                while let Some(e) = entry {
                    len += 1;
                    entry = e.next.as_deref();
                }
                len
            })
            .max()
            .unwrap_or(0)
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ClueResolver for SuspectIndex {
    fn resolve(&self, clue: &str) -> Option<&SuspectName> {
        self.lookup(clue)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    proptest! {
        /// Property: the index answers like a map where later inserts win
        #[test]
        fn test_behaves_like_map(
            pairs in prop::collection::vec(("[a-z]{1,8}", "[A-Z][a-z]{1,8}"), 0..50),
            buckets in 1usize..32,
        ) {
            let mut index = SuspectIndex::with_buckets(buckets).unwrap();
            let mut expected = HashMap::new();
            for (c, s) in &pairs {
                index.insert(ClueText::new(c.clone()).unwrap(), SuspectName::new(s.clone()).unwrap());
                expected.insert(c.clone(), s.clone());
            }
            for (c, s) in &expected {
                prop_assert_eq!(index.lookup(c).map(|n| n.as_str()), Some(s.as_str()));
            }
            prop_assert!(index.lookup("0").is_none());
        }
    }
}
