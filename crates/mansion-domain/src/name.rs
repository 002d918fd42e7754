//! Bounded names for rooms, clues and suspects
//!
//! The game stores every name in a small owned string with a hard upper
//! length. Longer input is rejected, never truncated.

use crate::DomainError;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Describes one family of names and its maximum length
pub trait NameKind {
    /// Human-readable kind, used in error messages
    const KIND: &'static str;

    /// Maximum length in bytes
    const MAX: usize;
}

/// Marker for room names
#[derive(Debug)]
pub enum RoomKind {}

/// Marker for clue texts
#[derive(Debug)]
pub enum ClueKind {}

/// Marker for suspect names
#[derive(Debug)]
pub enum SuspectKind {}

impl NameKind for RoomKind {
    const KIND: &'static str = "Room";
    const MAX: usize = 29;
}

impl NameKind for ClueKind {
    const KIND: &'static str = "Clue";
    const MAX: usize = 49;
}

impl NameKind for SuspectKind {
    const KIND: &'static str = "Suspect";
    const MAX: usize = 29;
}

/// Name of a room in the mansion
pub type RoomName = BoundedName<RoomKind>;

/// Text of a clue
pub type ClueText = BoundedName<ClueKind>;

/// Name of a suspect
pub type SuspectName = BoundedName<SuspectKind>;

/// An owned, non-empty string of at most `K::MAX` bytes
///
/// Comparison is case-sensitive byte-lexicographic, the same order the clue
/// ledger lists clues in.
pub struct BoundedName<K: NameKind> {
    value: String,
    kind: PhantomData<K>,
}

impl<K: NameKind> BoundedName<K> {
    /// Create a new name
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyName`] for an empty string and
    /// [`DomainError::NameTooLong`] when the value exceeds `K::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use mansion_domain::SuspectName;
    ///
    /// let name = SuspectName::new("Elisa").unwrap();
    /// assert_eq!(name.as_str(), "Elisa");
    /// assert!(SuspectName::new("x".repeat(30)).is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::EmptyName { kind: K::KIND });
        }
        if value.len() > K::MAX {
            return Err(DomainError::NameTooLong {
                kind: K::KIND,
                max: K::MAX,
                actual: value.len(),
            });
        }
        Ok(Self {
            value,
            kind: PhantomData,
        })
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Maximum accepted length in bytes
    pub const fn max_len() -> usize {
        K::MAX
    }
}

impl<K: NameKind> Clone for BoundedName<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: NameKind> PartialEq for BoundedName<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: NameKind> Eq for BoundedName<K> {}

impl<K: NameKind> PartialOrd for BoundedName<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: NameKind> Ord for BoundedName<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: NameKind> Hash for BoundedName<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: NameKind> fmt::Debug for BoundedName<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

impl<K: NameKind> fmt::Display for BoundedName<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<K: NameKind> AsRef<str> for BoundedName<K> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<K: NameKind> Borrow<str> for BoundedName<K> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<K: NameKind> std::str::FromStr for BoundedName<K> {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_creation() {
        let room = RoomName::new("Biblioteca").unwrap();
        assert_eq!(room.as_str(), "Biblioteca");
        assert_eq!(room.to_string(), "Biblioteca");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            ClueText::new(""),
            Err(DomainError::EmptyName { kind: "Clue" })
        );
    }

    #[test]
    fn test_length_limits() {
        assert!(RoomName::new("a".repeat(29)).is_ok());
        assert_eq!(
            RoomName::new("a".repeat(30)),
            Err(DomainError::NameTooLong {
                kind: "Room",
                max: 29,
                actual: 30
            })
        );
        assert!(ClueText::new("a".repeat(49)).is_ok());
        assert!(ClueText::new("a".repeat(50)).is_err());
    }

    #[test]
    fn test_length_counts_bytes() {
        // 15 two-byte characters
        let wide = "ç".repeat(15);
        assert_eq!(wide.chars().count(), 15);
        assert!(SuspectName::new(wide).is_err());
    }

    #[test]
    fn test_ordering_is_case_sensitive() {
        let upper = ClueText::new("Zebra").unwrap();
        let lower = ClueText::new("apple").unwrap();
        assert!(upper < lower);
    }
}
