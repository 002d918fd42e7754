//! Mansion Domain Layer
//!
//! This crate contains the rules of the mansion deduction game: where the
//! rooms are, which clue each room holds, who each clue implicates and how an
//! accusation is judged. It performs no I/O; input arrives through the
//! [`traits::CommandSource`] seam and everything the player should see is
//! reported as an [`explorer::Event`].
//!
//! ## Key Concepts
//!
//! - **Mansion Map**: static binary tree of rooms defining movement topology
//! - **Clue Ledger**: ordered search tree of the clues discovered so far
//! - **Suspect Index**: chained lookup table from clue text to suspect
//! - **Explorer**: traversal state machine coupling input to discovery
//! - **Verdict Evaluator**: counts clues against the accused and applies
//!   a fixed guilt threshold
//!
//! ## Example
//!
//! ```
//! use mansion_domain::{Command, Explorer, FactTable, MansionMap, SuspectName, VerdictEvaluator};
//!
//! let map = MansionMap::build().unwrap();
//! let facts = FactTable::standard().unwrap();
//! let mut explorer = Explorer::new(&map, &facts);
//!
//! explorer.step(Command::Left);
//! explorer.step(Command::Left);
//! explorer.step(Command::Quit);
//!
//! let findings = explorer.finish();
//! let evaluator = VerdictEvaluator::new(&findings.ledger, &findings.index);
//! let verdict = evaluator.evaluate(&SuspectName::new("Elisa").unwrap());
//! assert!(verdict.is_guilty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod explorer;
pub mod facts;
pub mod index;
pub mod ledger;
pub mod mansion;
pub mod name;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use error::DomainError;
pub use explorer::{Command, DiscoveryPolicy, Event, Explorer, ExplorerState, Findings};
pub use facts::FactTable;
pub use index::SuspectIndex;
pub use ledger::ClueLedger;
pub use mansion::{Direction, MansionMap, Room, RoomId, RoomSpec};
pub use name::{BoundedName, ClueText, RoomName, SuspectName};
pub use verdict::{Outcome, Verdict, VerdictEvaluator, GUILT_THRESHOLD};
