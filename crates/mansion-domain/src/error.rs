//! Error types for the domain layer

use thiserror::Error;

/// Errors raised while building the fixed game data
///
/// Moving into a wall or typing an unknown command is not an error; those
/// are reported as explorer events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A name was empty
    #[error("{kind} name cannot be empty")]
    EmptyName {
        /// What kind of name was rejected
        kind: &'static str,
    },

    /// A name exceeded its maximum length
    #[error("{kind} name is {actual} bytes long, the maximum is {max}")]
    NameTooLong {
        /// What kind of name was rejected
        kind: &'static str,
        /// Maximum accepted length in bytes
        max: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The layout has no rooms
    #[error("Mansion layout is empty")]
    EmptyLayout,

    /// Two rooms share a name
    #[error("Duplicate room: {0}")]
    DuplicateRoom(String),

    /// A room references a child that is not part of the layout
    #[error("Room '{room}' references unknown room '{child}'")]
    UnknownRoom {
        /// Parent room
        room: String,
        /// Missing child
        child: String,
    },

    /// A room is its own child, the entrance's child, or the child of more
    /// than one parent
    #[error("Room '{0}' has more than one parent")]
    SharedRoom(String),

    /// A room cannot be reached from the entrance
    #[error("Room '{0}' is not reachable from the entrance")]
    UnreachableRoom(String),

    /// A room of the map has no clue in the fact table
    #[error("No clue defined for room '{0}'")]
    MissingClue(String),

    /// A clue of the fact table has no suspect
    #[error("No suspect defined for clue '{0}'")]
    MissingSuspect(String),

    /// The suspect index needs at least one bucket
    #[error("Suspect index needs at least one bucket")]
    NoBuckets,
}
