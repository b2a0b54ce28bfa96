use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, warn};

use crate::direction::Direction;
use crate::discovery::{Discovery, Strategy};
use crate::error::TraversalError;
use crate::stitch::stitch;
use crate::verify::{VerificationReport, verify};
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    pub seed: u64,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub seed: u64,
    pub strategy: Strategy,
    pub discovery: Discovery,
    pub path: Vec<Direction>,
    pub report: VerificationReport,
}

/// Discovers the world from its starting room, stitches a covering walk and
/// replays it. An incomplete walk is reported in `report`, not as an error.
pub fn solve(world: &World, options: &SolveOptions) -> Result<Solution, TraversalError> {
    let start_id = world.starting_room();
    let start = world
        .room_ref(start_id)
        .ok_or(TraversalError::UnknownRoom(start_id))?;
    let mut rng = StdRng::seed_from_u64(options.seed);

    info!(start = start_id, seed = options.seed, strategy = ?options.strategy, "discovering");
    let discovery = options.strategy.discover(&start, &mut rng);
    if discovery.room_count() < world.room_count() {
        warn!(
            reachable = discovery.room_count(),
            total = world.room_count(),
            "map is not connected from the starting room"
        );
    }

    let path = stitch(&discovery.visited, &discovery.adjacency)?;
    info!(moves = path.len(), "stitched traversal");

    let report = verify(&path, start_id, world)?;
    info!(passed = report.passed, rooms = report.rooms_visited, "verified traversal");

    Ok(Solution {
        seed: options.seed,
        strategy: options.strategy,
        discovery,
        path,
        report,
    })
}
