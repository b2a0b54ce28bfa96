//! Small hand-built worlds shared by the unit tests.

use std::collections::{HashMap, VecDeque};

use crate::direction::Direction::{self, East, North, South, West};
use crate::world::{Room, RoomId, World};

type RoomSpec<'a> = (RoomId, (i32, i32), &'a [(Direction, RoomId)]);

pub fn world(rooms: &[RoomSpec<'_>], start: RoomId) -> World {
    let rooms = rooms.iter().map(|&(id, coords, exits)| {
        exits
            .iter()
            .fold(Room::new(id, Some(coords)), |room, &(d, to)| room.with_exit(d, to))
    });
    World::new(rooms, start).expect("fixture world is valid")
}

/// 0 - 1 - 2 stacked northwards.
pub fn line3() -> World {
    world(
        &[
            (0, (0, 0), &[(North, 1)]),
            (1, (0, 1), &[(South, 0), (North, 2)]),
            (2, (0, 2), &[(South, 1)]),
        ],
        0,
    )
}

/// Four rooms in a square: 0 -e- 1 -n- 2 -w- 3 -s- 0.
pub fn cycle4() -> World {
    world(
        &[
            (0, (0, 0), &[(East, 1), (North, 3)]),
            (1, (1, 0), &[(West, 0), (North, 2)]),
            (2, (1, 1), &[(South, 1), (West, 3)]),
            (3, (0, 1), &[(East, 2), (South, 0)]),
        ],
        0,
    )
}

/// A plus sign with arms of length two around room 0.
pub fn cross() -> World {
    world(
        &[
            (0, (0, 0), &[(North, 1), (South, 3), (East, 5), (West, 7)]),
            (1, (0, 1), &[(South, 0), (North, 2)]),
            (2, (0, 2), &[(South, 1)]),
            (3, (0, -1), &[(North, 0), (South, 4)]),
            (4, (0, -2), &[(North, 3)]),
            (5, (1, 0), &[(West, 0), (East, 6)]),
            (6, (2, 0), &[(West, 5)]),
            (7, (-1, 0), &[(East, 0), (West, 8)]),
            (8, (-2, 0), &[(East, 7)]),
        ],
        0,
    )
}

/// The square of [`cycle4`] with a two-room spur east of 1 and one room north of 2.
pub fn loop_fork() -> World {
    world(
        &[
            (0, (0, 0), &[(East, 1), (North, 3)]),
            (1, (1, 0), &[(West, 0), (North, 2), (East, 4)]),
            (2, (1, 1), &[(South, 1), (West, 3), (North, 6)]),
            (3, (0, 1), &[(East, 2), (South, 0)]),
            (4, (2, 0), &[(West, 1), (East, 5)]),
            (5, (3, 0), &[(West, 4)]),
            (6, (1, 2), &[(South, 2)]),
        ],
        0,
    )
}

/// Two separate two-room corridors. Start is in the first one.
pub fn disconnected() -> World {
    world(
        &[
            (0, (0, 0), &[(East, 1)]),
            (1, (1, 0), &[(West, 0)]),
            (2, (0, 5), &[(East, 3)]),
            (3, (1, 5), &[(West, 2)]),
        ],
        0,
    )
}

/// Edge-count distances from `from` to every reachable room, computed on the
/// world itself rather than on a discovered adjacency map.
pub fn distances_from(world: &World, from: RoomId) -> HashMap<RoomId, usize> {
    let mut dist = HashMap::from([(from, 0)]);
    let mut queue = VecDeque::from([from]);
    while let Some(room) = queue.pop_front() {
        let d = dist[&room];
        for next in world.room(room).into_iter().flat_map(|r| r.exit_map().values()) {
            if !dist.contains_key(next) {
                dist.insert(*next, d + 1);
                queue.push_back(*next);
            }
        }
    }
    dist
}
