use std::collections::BTreeMap;

use crate::direction::Direction;
use crate::error::{MapError, TraversalError};

pub type RoomId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub coords: Option<(i32, i32)>,
    exits: BTreeMap<Direction, RoomId>, // direction -> neighbor id
}

impl Room {
    pub fn new(id: RoomId, coords: Option<(i32, i32)>) -> Self {
        Self {
            id,
            coords,
            exits: BTreeMap::new(),
        }
    }

    pub fn with_exit(mut self, direction: Direction, to: RoomId) -> Self {
        self.connect(direction, to);
        self
    }

    pub fn connect(&mut self, direction: Direction, to: RoomId) {
        self.exits.insert(direction, to);
    }

    /// Available exits in the fixed order north, south, east, west.
    pub fn exits(&self) -> Vec<Direction> {
        self.exits.keys().copied().collect()
    }

    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    pub fn exit_map(&self) -> &BTreeMap<Direction, RoomId> {
        &self.exits
    }
}

/// The static maze. Built once and only read afterwards. Every exit has a
/// matching return exit, so any room reached can be left the way it was
/// entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rooms: BTreeMap<RoomId, Room>,
    starting_room: RoomId,
}

impl World {
    pub fn new(
        rooms: impl IntoIterator<Item = Room>,
        starting_room: RoomId,
    ) -> Result<Self, MapError> {
        let mut by_id = BTreeMap::new();
        for room in rooms {
            let id = room.id;
            if by_id.insert(id, room).is_some() {
                return Err(MapError::DuplicateRoom(id));
            }
        }
        if by_id.is_empty() {
            return Err(MapError::Empty);
        }
        if !by_id.contains_key(&starting_room) {
            return Err(MapError::MissingStart(starting_room));
        }

        for room in by_id.values() {
            for (&direction, &target) in &room.exits {
                let Some(other) = by_id.get(&target) else {
                    return Err(MapError::DanglingExit {
                        room: room.id,
                        direction,
                        target,
                    });
                };
                if other.exit(direction.opposite()) != Some(room.id) {
                    return Err(MapError::OneWayExit {
                        room: room.id,
                        direction,
                        target,
                    });
                }
            }
        }

        Ok(Self {
            rooms: by_id,
            starting_room,
        })
    }

    pub fn starting_room(&self) -> RoomId {
        self.starting_room
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys().copied()
    }

    pub fn neighbor(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(id).and_then(|room| room.exit(direction))
    }

    pub fn room_ref(&self, id: RoomId) -> Option<RoomRef<'_>> {
        self.rooms.contains_key(&id).then_some(RoomRef { world: self, id })
    }
}

/// What discovery needs to know about a room: who it is, where its exits
/// are, and which room lies behind each of them.
pub trait RoomExits: Sized {
    fn id(&self) -> RoomId;
    fn exits(&self) -> Vec<Direction>;
    fn room_in_direction(&self, direction: Direction) -> Option<Self>;
}

/// A room handle borrowed from a [`World`].
#[derive(Debug, Clone, Copy)]
pub struct RoomRef<'a> {
    world: &'a World,
    id: RoomId,
}

impl RoomExits for RoomRef<'_> {
    fn id(&self) -> RoomId {
        self.id
    }

    fn exits(&self) -> Vec<Direction> {
        self.world.room(self.id).map(Room::exits).unwrap_or_default()
    }

    fn room_in_direction(&self, direction: Direction) -> Option<Self> {
        let to = self.world.neighbor(self.id, direction)?;
        self.world.room_ref(to)
    }
}

/// A cursor walking the world one move at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    current_room: RoomId,
}

impl Player {
    pub fn new(current_room: RoomId) -> Self {
        Self { current_room }
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// Moves through `direction`. A missing exit leaves the player in place.
    pub fn travel(&mut self, world: &World, direction: Direction) -> Result<RoomId, TraversalError> {
        let next = world
            .neighbor(self.current_room, direction)
            .ok_or(TraversalError::Blocked {
                room: self.current_room,
                direction,
            })?;
        self.current_room = next;
        Ok(next)
    }
}
