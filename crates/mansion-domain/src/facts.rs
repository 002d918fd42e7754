//! Fixed facts of the mystery
//!
//! The layout, the clue hidden in each room and the suspect each clue
//! implicates are constants of the game.

use crate::mansion::RoomSpec;
use crate::{ClueText, DomainError, MansionMap, RoomName, SuspectName};
use std::collections::{BTreeSet, HashMap};

/// Adjacency of the standard mansion, entrance first
pub const STANDARD_LAYOUT: &[RoomSpec<'static>] = &[
    RoomSpec::new("Hall", Some("Biblioteca"), Some("Cozinha")),
    RoomSpec::new("Biblioteca", Some("Adega"), Some("Escritorio")),
    RoomSpec::new("Cozinha", Some("Jardim"), Some("Porao")),
    RoomSpec::leaf("Adega"),
    RoomSpec::leaf("Escritorio"),
    RoomSpec::leaf("Jardim"),
    RoomSpec::leaf("Porao"),
];

/// Clue found in each room
pub const ROOM_CLUES: &[(&str, &str)] = &[
    ("Hall", "Chave dourada"),
    ("Biblioteca", "Livro rasgado"),
    ("Escritorio", "Documento adulterado"),
    ("Adega", "Taca quebrada"),
    ("Cozinha", "Faca suja"),
    ("Jardim", "Pegadas recentes"),
    ("Porao", "Luvas queimadas"),
];

/// Suspect implicated by each clue
pub const CLUE_SUSPECTS: &[(&str, &str)] = &[
    ("Chave dourada", "Elisa"),
    ("Livro rasgado", "Mortimer"),
    ("Documento adulterado", "Clara"),
    ("Taca quebrada", "Elisa"),
    ("Faca suja", "Mortimer"),
    ("Pegadas recentes", "Clara"),
    ("Luvas queimadas", "Mortimer"),
];

/// Validated room → clue → suspect facts
#[derive(Debug, Clone, Default)]
pub struct FactTable {
    room_clues: HashMap<RoomName, ClueText>,
    clue_suspects: HashMap<ClueText, SuspectName>,
}

impl FactTable {
    /// Load the standard facts
    pub fn standard() -> Result<Self, DomainError> {
        Self::from_pairs(ROOM_CLUES, CLUE_SUSPECTS)
    }

    /// Build a fact table from association lists
    ///
    /// A later pair for the same key replaces an earlier one.
    pub fn from_pairs(
        room_clues: &[(&str, &str)],
        clue_suspects: &[(&str, &str)],
    ) -> Result<Self, DomainError> {
        let mut table = Self::default();
        for (room, clue) in room_clues {
            table
                .room_clues
                .insert(RoomName::new(*room)?, ClueText::new(*clue)?);
        }
        for (clue, suspect) in clue_suspects {
            table
                .clue_suspects
                .insert(ClueText::new(*clue)?, SuspectName::new(*suspect)?);
        }
        Ok(table)
    }

    /// Clue hidden in a room, if any
    ///
    /// Unknown rooms simply have no clue.
    pub fn clue_for_room(&self, room: &str) -> Option<&ClueText> {
        self.room_clues.get(room)
    }

    /// Suspect implicated by a clue, if any
    pub fn suspect_for_clue(&self, clue: &str) -> Option<&SuspectName> {
        self.clue_suspects.get(clue)
    }

    /// Distinct suspects, sorted by name
    pub fn suspects(&self) -> Vec<&SuspectName> {
        self.clue_suspects
            .values()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Check that every room of `map` hides a clue and every such clue
    /// names a suspect
    pub fn verify_covers(&self, map: &MansionMap) -> Result<(), DomainError> {
        for (_, room) in map.iter() {
            let clue = self
                .clue_for_room(room.name.as_str())
                .ok_or_else(|| DomainError::MissingClue(room.name.to_string()))?;
            if self.suspect_for_clue(clue.as_str()).is_none() {
                return Err(DomainError::MissingSuspect(clue.to_string()));
            }
        }
        Ok(())
    }
}
