use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::direction::Direction;
use crate::error::TraversalError;
use crate::world::{Player, RoomId, World};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Distinct rooms entered, the start included.
    pub rooms_visited: usize,
    pub moves: usize,
    pub total_rooms: usize,
    pub unvisited: Vec<RoomId>,
    /// Moves with no exit in the player's room; the player stayed put.
    pub blocked_moves: usize,
    pub passed: bool,
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(
                f,
                "TESTS PASSED: {} moves, {} rooms visited",
                self.moves, self.rooms_visited
            )
        } else {
            writeln!(f, "TESTS FAILED: INCOMPLETE TRAVERSAL")?;
            write!(f, "{} unvisited rooms", self.unvisited.len())
        }
    }
}

/// Replays `path` from `start` against the world and checks that every room
/// was entered.
pub fn verify(
    path: &[Direction],
    start: RoomId,
    world: &World,
) -> Result<VerificationReport, TraversalError> {
    if world.room(start).is_none() {
        return Err(TraversalError::UnknownRoom(start));
    }

    let mut player = Player::new(start);
    let mut seen = BTreeSet::from([start]);
    let mut blocked_moves = 0;
    for (step, &direction) in path.iter().enumerate() {
        match player.travel(world, direction) {
            Ok(room) => {
                seen.insert(room);
            }
            Err(err) => {
                warn!(step, %err, "move is not navigable");
                blocked_moves += 1;
            }
        }
    }

    let unvisited: Vec<RoomId> = world.room_ids().filter(|id| !seen.contains(id)).collect();
    Ok(VerificationReport {
        rooms_visited: seen.len(),
        moves: path.len(),
        total_rooms: world.room_count(),
        passed: seen.len() == world.room_count(),
        unvisited,
        blocked_moves,
    })
}
