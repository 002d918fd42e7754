//! Mansion map - the static binary tree of rooms
//!
//! Rooms live in an arena owned by [`MansionMap`] and refer to their
//! children by [`RoomId`]. Every room except the entrance has exactly one
//! parent, so the arena always describes a tree.

use crate::facts::STANDARD_LAYOUT;
use crate::{DomainError, RoomName};
use std::collections::HashMap;
use std::fmt;

/// Index of a room inside a [`MansionMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(usize);

/// Direction of a move between rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the left child
    Left,

    /// Towards the right child
    Right,
}

impl Direction {
    /// Get the direction name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room of the mansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique room name
    pub name: RoomName,

    /// Room reached by going left
    pub left: Option<RoomId>,

    /// Room reached by going right
    pub right: Option<RoomId>,
}

/// Adjacency description of one room, used to build a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSpec<'a> {
    /// Room name
    pub name: &'a str,

    /// Name of the left child
    pub left: Option<&'a str>,

    /// Name of the right child
    pub right: Option<&'a str>,
}

impl<'a> RoomSpec<'a> {
    /// Describe a room
    pub const fn new(name: &'a str, left: Option<&'a str>, right: Option<&'a str>) -> Self {
        Self { name, left, right }
    }

    /// Describe a room without children
    pub const fn leaf(name: &'a str) -> Self {
        Self::new(name, None, None)
    }
}

/// The mansion: a fixed tree of rooms rooted at the entrance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MansionMap {
    rooms: Vec<Room>,
}

impl MansionMap {
    /// Build the standard seven-room mansion
    pub fn build() -> Result<Self, DomainError> {
        Self::from_layout(STANDARD_LAYOUT)
    }

    /// Build a mansion from an adjacency description
    ///
    /// The first entry is the entrance.
    ///
    /// # Errors
    /// Rejects empty layouts, duplicate names, unknown children, rooms with
    /// more than one parent and rooms unreachable from the entrance.
    pub fn from_layout(layout: &[RoomSpec<'_>]) -> Result<Self, DomainError> {
        if layout.is_empty() {
            return Err(DomainError::EmptyLayout);
        }

        let mut ids: HashMap<&str, RoomId> = HashMap::with_capacity(layout.len());
        for (i, spec) in layout.iter().enumerate() {
            if ids.insert(spec.name, RoomId(i)).is_some() {
                return Err(DomainError::DuplicateRoom(spec.name.to_string()));
            }
        }

        let mut has_parent = vec![false; layout.len()];
        let mut rooms = Vec::with_capacity(layout.len());
        for spec in layout {
            let mut resolve = |child: Option<&str>| -> Result<Option<RoomId>, DomainError> {
                let Some(child) = child else {
                    return Ok(None);
                };
                let id = *ids.get(child).ok_or_else(|| DomainError::UnknownRoom {
                    room: spec.name.to_string(),
                    child: child.to_string(),
                })?;
                // The entrance can never be a child: that would close a cycle.
                if child == spec.name || id.0 == 0 || has_parent[id.0] {
                    return Err(DomainError::SharedRoom(child.to_string()));
                }
                has_parent[id.0] = true;
                Ok(Some(id))
            };

            let left = resolve(spec.left)?;
            let right = resolve(spec.right)?;
            rooms.push(Room {
                name: RoomName::new(spec.name)?,
                left,
                right,
            });
        }

        let map = Self { rooms };
        let reachable = map.iter().count();
        if reachable != map.rooms.len() {
            // With single parents and no edge into the entrance, anything not
            // reached hangs off a detached cycle.
            let seen: Vec<RoomId> = map.iter().map(|(id, _)| id).collect();
            let missing = (0..map.rooms.len())
                .map(RoomId)
                .find(|id| !seen.contains(id))
                .map(|id| map.rooms[id.0].name.to_string())
                .unwrap_or_default();
            return Err(DomainError::UnreachableRoom(missing));
        }

        Ok(map)
    }

    /// The entrance of the mansion
    pub fn root(&self) -> RoomId {
        RoomId(0)
    }

    /// Look up a room by id
    ///
    /// Ids handed out by this map are always valid for it.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Name of a room
    pub fn name(&self, id: RoomId) -> &RoomName {
        &self.room(id).name
    }

    /// Left and right children of a room
    pub fn children(&self, id: RoomId) -> (Option<RoomId>, Option<RoomId>) {
        let room = self.room(id);
        (room.left, room.right)
    }

    /// Child of a room in the given direction
    pub fn child(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        let room = self.room(id);
        match direction {
            Direction::Left => room.left,
            Direction::Right => room.right,
        }
    }

    /// Find a room by name
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.name.as_str() == name)
            .map(RoomId)
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the map has no rooms (never true for a built map)
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Walk the rooms in pre-order, starting at the entrance
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            map: self,
            stack: vec![self.root()],
        }
    }
}

/// Pre-order walk over a [`MansionMap`]
pub struct PreOrder<'a> {
    map: &'a MansionMap,
    stack: Vec<RoomId>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (RoomId, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let room = self.map.room(id);
        if let Some(right) = room.right {
            self.stack.push(right);
        }
        if let Some(left) = room.left {
            self.stack.push(left);
        }
        Some((id, room))
    }
}
