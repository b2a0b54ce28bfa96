pub mod bfs;
pub mod direction;
pub mod discovery;
pub mod error;
pub mod map_file;
pub mod mapgen;
pub mod pipeline;
pub mod render;
pub mod stitch;
pub mod verify;
pub mod world;

#[cfg(test)]
mod test_support;

pub use bfs::{Path, shortest_path, shortest_route};
pub use direction::Direction;
pub use discovery::{AdjacencyMap, Discovery, Strategy, discover, discover_with_stack};
pub use error::{MapError, TraversalError};
pub use pipeline::{Solution, SolveOptions, solve};
pub use stitch::stitch;
pub use verify::{VerificationReport, verify};
pub use world::{Player, Room, RoomExits, RoomId, RoomRef, World};
