use std::collections::{HashSet, VecDeque};

use crate::direction::Direction;
use crate::discovery::AdjacencyMap;
use crate::error::TraversalError;
use crate::world::RoomId;

/// A walk: the rooms passed through and the moves that connect them.
/// `rooms.len() == moves.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub rooms: Vec<RoomId>,
    pub moves: Vec<Direction>,
}

impl Path {
    fn start(room: RoomId) -> Self {
        Self {
            rooms: vec![room],
            moves: Vec::new(),
        }
    }

    fn extended(&self, direction: Direction, to: RoomId) -> Self {
        let mut next = self.clone();
        next.rooms.push(to);
        next.moves.push(direction);
        next
    }
}

/// Breadth-first search over the discovered connections. Among several
/// shortest walks, the one found first in each room's recorded exit order
/// wins.
pub fn shortest_route(
    start: RoomId,
    goal: RoomId,
    adjacency: &AdjacencyMap,
) -> Result<Path, TraversalError> {
    let no_path = TraversalError::NoPath {
        from: start,
        to: goal,
    };
    if !adjacency.contains(start) || !adjacency.contains(goal) {
        return Err(no_path);
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(Path::start(start));

    while let Some(path) = queue.pop_front() {
        let Some(&room) = path.rooms.last() else {
            continue;
        };
        if !visited.insert(room) {
            continue;
        }
        if room == goal {
            return Ok(path);
        }
        for &(direction, next) in adjacency.get(room).unwrap_or_default() {
            if !visited.contains(&next) {
                queue.push_back(path.extended(direction, next));
            }
        }
    }

    Err(no_path)
}

/// The moves of [`shortest_route`]. Empty when `start == goal`.
pub fn shortest_path(
    start: RoomId,
    goal: RoomId,
    adjacency: &AdjacencyMap,
) -> Result<Vec<Direction>, TraversalError> {
    shortest_route(start, goal, adjacency).map(|path| path.moves)
}
