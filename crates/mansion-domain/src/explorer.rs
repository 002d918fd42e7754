//! Explorer - the traversal state machine
//!
//! [`transition`] is a pure function of the current state and one command.
//! [`Explorer`] wraps it, keeps the cursor, and records every clue found on
//! arrival in both the [`ClueLedger`] and the [`SuspectIndex`].

use crate::traits::CommandSource;
use crate::{ClueLedger, ClueText, Direction, FactTable, MansionMap, RoomId, RoomName, SuspectIndex};
use tracing::{debug, warn};

/// One player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Go to the left child
    Left,

    /// Go to the right child
    Right,

    /// Stop exploring
    Quit,

    /// Anything else, kept verbatim for feedback
    Invalid(String),
}

impl Command {
    /// Parse one input token
    ///
    /// Accepts `e`/`esquerda`, `d`/`direita` and `s`/`sair` in any case.
    ///
    /// # Examples
    ///
    /// ```
    /// use mansion_domain::Command;
    ///
    /// assert_eq!(Command::parse("e"), Command::Left);
    /// assert_eq!(Command::parse("Direita"), Command::Right);
    /// assert_eq!(Command::parse("x"), Command::Invalid("x".to_string()));
    /// ```
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.to_lowercase().as_str() {
            "e" | "esquerda" => Command::Left,
            "d" | "direita" => Command::Right,
            "s" | "sair" => Command::Quit,
            _ => Command::Invalid(token.to_string()),
        }
    }
}

/// Where the explorer is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerState {
    /// Standing in a room
    AtRoom(RoomId),

    /// Exploration is over
    Finished,
}

/// Something the player should be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The explorer walked into a room
    Entered {
        /// Room entered
        room: RoomName,
    },

    /// A clue was discovered and recorded
    ClueFound {
        /// Room the clue was found in
        room: RoomName,
        /// The clue
        clue: ClueText,
    },

    /// There is no room in the requested direction
    NoRoom {
        /// Requested direction
        direction: Direction,
    },

    /// The command was not understood
    InvalidOption {
        /// Raw input
        input: String,
    },

    /// The player stopped exploring
    Finished,
}

/// When a room's clue is (re)discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryPolicy {
    /// Only the first arrival in a room yields its clue
    #[default]
    FirstVisit,

    /// Every step spent in a room yields its clue again, including steps
    /// that did not move the explorer
    EveryVisit,
}

/// Result of a pure transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the command
    pub next: ExplorerState,

    /// Room newly arrived in, if the command moved the explorer
    pub arrived: Option<RoomId>,

    /// Movement feedback
    pub events: Vec<Event>,
}

/// Apply one command to a state
///
/// Commands received after [`ExplorerState::Finished`] are ignored.
pub fn transition(map: &MansionMap, state: ExplorerState, command: &Command) -> Transition {
    let ExplorerState::AtRoom(current) = state else {
        return Transition {
            next: ExplorerState::Finished,
            arrived: None,
            events: Vec::new(),
        };
    };

    let stay = |event: Event| Transition {
        next: state,
        arrived: None,
        events: vec![event],
    };

    let direction = match command {
        Command::Left => Direction::Left,
        Command::Right => Direction::Right,
        Command::Quit => {
            return Transition {
                next: ExplorerState::Finished,
                arrived: None,
                events: vec![Event::Finished],
            }
        }
        Command::Invalid(input) => {
            return stay(Event::InvalidOption {
                input: input.clone(),
            })
        }
    };

    match map.child(current, direction) {
        Some(next) => Transition {
            next: ExplorerState::AtRoom(next),
            arrived: Some(next),
            events: vec![Event::Entered {
                room: map.name(next).clone(),
            }],
        },
        None => stay(Event::NoRoom { direction }),
    }
}

/// Everything collected during one exploration
#[derive(Debug, Clone)]
pub struct Findings {
    /// Discovered clues in order
    pub ledger: ClueLedger,

    /// Clue → suspect for every discovered clue
    pub index: SuspectIndex,

    /// Rooms visited, in order of first arrival
    pub visited: Vec<RoomId>,
}

/// Drives one exploration of a mansion
pub struct Explorer<'a> {
    map: &'a MansionMap,
    facts: &'a FactTable,
    policy: DiscoveryPolicy,
    state: ExplorerState,
    started: bool,
    visited: Vec<RoomId>,
    ledger: ClueLedger,
    index: SuspectIndex,
}

impl<'a> Explorer<'a> {
    /// Create an explorer standing at the entrance
    pub fn new(map: &'a MansionMap, facts: &'a FactTable) -> Self {
        Self {
            map,
            facts,
            policy: DiscoveryPolicy::default(),
            state: ExplorerState::AtRoom(map.root()),
            started: false,
            visited: Vec::new(),
            ledger: ClueLedger::new(),
            index: SuspectIndex::new(),
        }
    }

    /// Choose when clues are rediscovered
    pub fn with_policy(mut self, policy: DiscoveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record suspects into `index` instead of a default one
    pub fn with_index(mut self, index: SuspectIndex) -> Self {
        self.index = index;
        self
    }

    /// Current state
    pub fn state(&self) -> ExplorerState {
        self.state
    }

    /// Room the explorer stands in, unless finished
    pub fn current_room(&self) -> Option<&'a RoomName> {
        match self.state {
            ExplorerState::AtRoom(id) => Some(self.map.name(id)),
            ExplorerState::Finished => None,
        }
    }

    /// Whether the player has quit
    pub fn is_finished(&self) -> bool {
        self.state == ExplorerState::Finished
    }

    /// Clues found so far
    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    /// Suspects recorded so far
    pub fn index(&self) -> &SuspectIndex {
        &self.index
    }

    /// Arrive at the entrance
    ///
    /// Returns nothing once the exploration has started.
    pub fn start(&mut self) -> Vec<Event> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        let root = self.map.root();
        let mut events = vec![Event::Entered {
            room: self.map.name(root).clone(),
        }];
        self.arrive(root, &mut events);
        events
    }

    /// Apply one command and report what happened
    pub fn step(&mut self, command: Command) -> Vec<Event> {
        let mut events = self.start();
        let outcome = transition(self.map, self.state, &command);
        debug!(?command, from = ?self.state, to = ?outcome.next, "explorer transition");

        self.state = outcome.next;
        events.extend(outcome.events);
        match (outcome.arrived, self.state) {
            (Some(room), _) => self.arrive(room, &mut events),
            (None, ExplorerState::AtRoom(room)) if self.policy == DiscoveryPolicy::EveryVisit => {
                self.arrive(room, &mut events)
            }
            _ => {}
        }
        events
    }

    /// Read commands from `source` until the player quits or input ends
    ///
    /// Every event is passed to `on_event` as it happens.
    pub fn run<S, F>(&mut self, source: &mut S, mut on_event: F) -> Result<(), S::Error>
    where
        S: CommandSource + ?Sized,
        F: FnMut(&Event),
    {
        for event in self.start() {
            on_event(&event);
        }
        while !self.is_finished() {
            let command = match source.next_command()? {
                Some(command) => command,
                None => {
                    debug!("input exhausted, stopping exploration");
                    Command::Quit
                }
            };
            for event in self.step(command) {
                on_event(&event);
            }
        }
        Ok(())
    }

    /// Stop and hand over what was collected
    pub fn finish(self) -> Findings {
        Findings {
            ledger: self.ledger,
            index: self.index,
            visited: self.visited,
        }
    }

    fn arrive(&mut self, room: RoomId, events: &mut Vec<Event>) {
        let first_visit = !self.visited.contains(&room);
        if first_visit {
            self.visited.push(room);
        }
        if !first_visit && self.policy == DiscoveryPolicy::FirstVisit {
            return;
        }

        let name = self.map.name(room);
        let Some(clue) = self.facts.clue_for_room(name.as_str()) else {
            return;
        };

        self.ledger.insert(clue.clone());
        match self.facts.suspect_for_clue(clue.as_str()) {
            Some(suspect) => self.index.insert(clue.clone(), suspect.clone()),
            None => warn!(clue = %clue, "clue implicates no known suspect"),
        }
        debug!(room = %name, clue = %clue, "clue discovered");

        events.push(Event::ClueFound {
            room: name.clone(),
            clue: clue.clone(),
        });
    }
}
