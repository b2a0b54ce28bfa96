use std::path::PathBuf;

use crate::direction::Direction;
use crate::world::RoomId;

/// Failures of the traversal core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    #[error("no path from room {from} to room {to}")]
    NoPath { from: RoomId, to: RoomId },
    #[error("cannot move {direction} from room {room}")]
    Blocked { room: RoomId, direction: Direction },
    #[error("room {0} is not part of the map")]
    UnknownRoom(RoomId),
}

/// Failures while reading or building a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("failed to read map {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse map JSON")]
    Json(#[from] serde_json::Error),
    #[error("map has no rooms")]
    Empty,
    #[error("room {0} is defined more than once")]
    DuplicateRoom(RoomId),
    #[error("starting room {0} is not in the map")]
    MissingStart(RoomId),
    #[error("room {room} has an exit {key:?} that is not a direction")]
    UnknownDirection { room: RoomId, key: String },
    #[error("room {room} exit {direction} leads to room {target}, which has no exit back")]
    OneWayExit {
        room: RoomId,
        direction: Direction,
        target: RoomId,
    },
    #[error("room {room} lists exit {direction} more than once")]
    DuplicateExit { room: RoomId, direction: Direction },
    #[error("a {width}x{height} grid has too many rooms")]
    TooLarge { width: usize, height: usize },
    #[error("room {room} exit {direction} leads to unknown room {target}")]
    DanglingExit {
        room: RoomId,
        direction: Direction,
        target: RoomId,
    },
}
