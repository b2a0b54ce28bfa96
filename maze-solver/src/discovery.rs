//! Randomized depth-first discovery of the room graph.
//!
//! Discovery walks every room reachable from a start room, recording each
//! room's `direction -> neighbor` connections and the order in which rooms
//! were first entered. Each room's exits are shuffled once, on first entry;
//! the connections are stored in that shuffled order and descent follows it.
//!
//! Two equivalent forms are provided: [`discover`] recurses once per room,
//! [`discover_with_stack`] keeps its frames in a `Vec` and is safe on maps
//! deep enough to exhaust the call stack. Given the same RNG state they
//! produce identical results.

use std::collections::BTreeMap;
use std::vec::IntoIter;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::direction::Direction;
use crate::world::{RoomExits, RoomId};

/// Discovered connections: room id -> ordered `(direction, neighbor)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyMap {
    rooms: BTreeMap<RoomId, Vec<(Direction, RoomId)>>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    /// Records `id`'s connections. The first record for a room wins.
    pub fn insert(&mut self, id: RoomId, exits: Vec<(Direction, RoomId)>) -> bool {
        if self.contains(id) {
            return false;
        }
        self.rooms.insert(id, exits);
        true
    }

    pub fn get(&self, id: RoomId) -> Option<&[(Direction, RoomId)]> {
        self.rooms.get(&id).map(Vec::as_slice)
    }

    pub fn neighbor(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.get(id)?
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|&(_, to)| to)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Discovery {
    pub adjacency: AdjacencyMap,
    /// Rooms in first-visit order; starts with the start room.
    pub visited: Vec<RoomId>,
}

impl Discovery {
    pub fn room_count(&self) -> usize {
        self.visited.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Recursive,
    Stack,
}

impl Strategy {
    pub fn discover<R, G>(self, start: &R, rng: &mut G) -> Discovery
    where
        R: RoomExits,
        G: Rng + ?Sized,
    {
        match self {
            Strategy::Recursive => discover(start, rng),
            Strategy::Stack => discover_with_stack(start, rng),
        }
    }
}

/// Recursive discovery. Recursion depth grows with the longest simple path
/// from `start`.
pub fn discover<R, G>(start: &R, rng: &mut G) -> Discovery
where
    R: RoomExits,
    G: Rng + ?Sized,
{
    let mut discovery = Discovery::default();
    visit(start, rng, &mut discovery);
    info!(rooms = discovery.room_count(), "discovery finished (recursive)");
    discovery
}

fn visit<R, G>(room: &R, rng: &mut G, discovery: &mut Discovery)
where
    R: RoomExits,
    G: Rng + ?Sized,
{
    let Some(neighbors) = enter(room, rng, discovery) else {
        return;
    };
    for (_, neighbor) in neighbors {
        visit(&neighbor, rng, discovery);
    }
}

/// Discovery with an explicit stack of frames instead of the call stack.
pub fn discover_with_stack<R, G>(start: &R, rng: &mut G) -> Discovery
where
    R: RoomExits,
    G: Rng + ?Sized,
{
    let mut discovery = Discovery::default();
    let mut stack: Vec<IntoIter<(Direction, R)>> = Vec::new();
    if let Some(frame) = enter(start, rng, &mut discovery) {
        stack.push(frame);
    }

    while let Some(frame) = stack.last_mut() {
        let next = frame.next();
        match next {
            Some((_, neighbor)) => {
                if let Some(child) = enter(&neighbor, rng, &mut discovery) {
                    stack.push(child);
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    info!(rooms = discovery.room_count(), "discovery finished (stack)");
    discovery
}

/// Records a newly seen room and returns its neighbors in descent order, or
/// `None` if the room was already discovered.
fn enter<R, G>(
    room: &R,
    rng: &mut G,
    discovery: &mut Discovery,
) -> Option<IntoIter<(Direction, R)>>
where
    R: RoomExits,
    G: Rng + ?Sized,
{
    let id = room.id();
    if discovery.adjacency.contains(id) {
        return None;
    }

    let mut directions = room.exits();
    directions.shuffle(rng);

    let mut neighbors = Vec::with_capacity(directions.len());
    for direction in directions {
        match room.room_in_direction(direction) {
            Some(next) => neighbors.push((direction, next)),
            None => warn!(room = id, %direction, "exit listed but leads nowhere"),
        }
    }

    // The whole entry is written before any neighbor is entered.
    let exits = neighbors.iter().map(|(d, r)| (*d, r.id())).collect::<Vec<_>>();
    debug!(room = id, ?exits, "discovered room");
    discovery.visited.push(id);
    discovery.adjacency.insert(id, exits);

    Some(neighbors.into_iter())
}
