//! Trait definitions for the seams of the game
//!
//! These traits define the boundaries between the game rules and whatever
//! feeds them. Interactive and scripted input live in the CLI crate.

use crate::explorer::Command;
use crate::SuspectName;

/// Resolves a clue to the suspect it implicates
///
/// Implemented by [`crate::SuspectIndex`] and [`crate::FactTable`].
pub trait ClueResolver {
    /// Suspect implicated by `clue`, or `None` when the clue is unknown
    fn resolve(&self, clue: &str) -> Option<&SuspectName>;
}

/// Supplies explorer commands, one per step
///
/// Implemented by the infrastructure layer (mansion-cli)
pub trait CommandSource {
    /// Error type for read operations
    type Error;

    /// Block until the next command is available
    ///
    /// `Ok(None)` means the input is exhausted; the explorer treats that as
    /// a request to stop.
    fn next_command(&mut self) -> Result<Option<Command>, Self::Error>;
}

impl ClueResolver for crate::FactTable {
    fn resolve(&self, clue: &str) -> Option<&SuspectName> {
        self.suspect_for_clue(clue)
    }
}

/// Commands taken from a list, mostly useful in tests
impl CommandSource for std::vec::IntoIter<Command> {
    type Error = std::convert::Infallible;

    fn next_command(&mut self) -> Result<Option<Command>, Self::Error> {
        Ok(self.next())
    }
}
