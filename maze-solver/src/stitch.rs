use tracing::debug;

use crate::bfs::shortest_path;
use crate::direction::{Direction, moves_to_string};
use crate::discovery::AdjacencyMap;
use crate::error::TraversalError;
use crate::world::RoomId;

/// Joins the shortest walks between each pair of consecutively visited rooms
/// into a single walk starting at `visited[0]`.
///
/// The result covers every room in `visited`, in that order, but is not the
/// shortest possible tour.
pub fn stitch(visited: &[RoomId], adjacency: &AdjacencyMap) -> Result<Vec<Direction>, TraversalError> {
    let mut path = Vec::new();
    for pair in visited.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let segment = shortest_path(from, to, adjacency)?;
        debug!(from, to, moves = %moves_to_string(&segment), "stitched segment");
        path.extend(segment);
    }
    Ok(path)
}
