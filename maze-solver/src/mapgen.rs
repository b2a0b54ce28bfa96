//! Seeded grid mazes.
//!
//! Room `y * width + x` sits at `(x, y)`. A randomized depth-first carve gives
//! a spanning tree (every room reachable, every exit two-way); `extra_passages`
//! further walls are then knocked down to add loops.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::direction::Direction;
use crate::error::MapError;
use crate::world::{Room, RoomId, World};

pub fn grid_maze(
    width: usize,
    height: usize,
    extra_passages: usize,
    seed: u64,
) -> Result<World, MapError> {
    let (width, height) = (width.max(1), height.max(1));
    // ids must fit a RoomId and coordinates an i32
    let cells = width
        .checked_mul(height)
        .filter(|&cells| RoomId::try_from(cells - 1).is_ok())
        .filter(|_| i32::try_from(width).is_ok() && i32::try_from(height).is_ok())
        .ok_or(MapError::TooLarge { width, height })?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rooms: Vec<Room> = (0..cells)
        .map(|cell| {
            let (x, y) = (cell % width, cell / width);
            Room::new(cell as RoomId, Some((x as i32, y as i32)))
        })
        .collect();

    let step = |cell: usize, direction: Direction| -> Option<usize> {
        let (dx, dy) = direction.offset();
        let x = (cell % width).checked_add_signed(dx as isize)?;
        let y = (cell / width).checked_add_signed(dy as isize)?;
        (x < width && y < height).then_some(y * width + x)
    };
    let carve = |rooms: &mut [Room], cell: usize, direction: Direction, next: usize| {
        rooms[cell].connect(direction, next as RoomId);
        rooms[next].connect(direction.opposite(), cell as RoomId);
    };

    let mut carved = vec![false; cells];
    let mut stack = vec![0usize];
    carved[0] = true;
    while let Some(&cell) = stack.last() {
        let options: Vec<(Direction, usize)> = Direction::ALL
            .iter()
            .filter_map(|&d| step(cell, d).map(|next| (d, next)))
            .filter(|&(_, next)| !carved[next])
            .collect();
        match options.choose(&mut rng) {
            Some(&(direction, next)) => {
                carve(&mut rooms, cell, direction, next);
                carved[next] = true;
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    // Walls still standing, each listed once (east and north sides).
    let mut walls: Vec<(usize, Direction, usize)> = (0..cells)
        .flat_map(|cell| [Direction::East, Direction::North].map(|d| (cell, d)))
        .filter_map(|(cell, d)| step(cell, d).map(|next| (cell, d, next)))
        .filter(|&(cell, d, _)| rooms[cell].exit(d).is_none())
        .collect();
    walls.shuffle(&mut rng);
    for &(cell, direction, next) in walls.iter().take(extra_passages) {
        carve(&mut rooms, cell, direction, next);
    }

    debug!(width, height, extra_passages, seed, "generated grid maze");
    World::new(rooms, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::distances_from;

    fn edge_count(world: &World) -> usize {
        world.rooms().map(|r| r.exits().len()).sum::<usize>() / 2
    }

    #[test]
    fn spanning_tree_without_extras() {
        let world = grid_maze(6, 4, 0, 99).unwrap();
        assert_eq!(world.room_count(), 24);
        assert_eq!(edge_count(&world), 23);
        assert_eq!(distances_from(&world, 0).len(), 24);
    }

    #[test]
    fn extra_passages_add_loops() {
        let world = grid_maze(5, 5, 6, 3).unwrap();
        assert_eq!(edge_count(&world), 24 + 6);
    }

    #[test]
    fn extras_are_capped_by_available_walls() {
        // a 3x3 grid has 12 walls in total, 8 of them used by the tree
        let world = grid_maze(3, 3, 100, 1).unwrap();
        assert_eq!(edge_count(&world), 12);
    }

    #[test]
    fn exits_are_two_way_and_match_coordinates() {
        let world = grid_maze(7, 3, 4, 12).unwrap();
        for room in world.rooms() {
            let (x, y) = room.coords.unwrap();
            for (&d, &to) in room.exit_map() {
                let (dx, dy) = d.offset();
                assert_eq!(world.room(to).unwrap().coords, Some((x + dx, y + dy)));
                assert_eq!(world.neighbor(to, d.opposite()), Some(room.id));
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(grid_maze(4, 4, 2, 8).unwrap(), grid_maze(4, 4, 2, 8).unwrap());
        assert_ne!(grid_maze(4, 4, 2, 8).unwrap(), grid_maze(4, 4, 2, 9).unwrap());
    }

    #[test]
    fn oversized_grids_are_rejected() {
        assert!(matches!(
            grid_maze(usize::MAX, 2, 0, 0),
            Err(MapError::TooLarge { width: usize::MAX, height: 2 })
        ));
        assert!(matches!(
            grid_maze(1 << 20, 1 << 13, 0, 0),
            Err(MapError::TooLarge { .. })
        ));
        assert!(matches!(
            grid_maze(1usize << 31, 1, 0, 0),
            Err(MapError::TooLarge { .. })
        ));
    }

    #[test]
    fn degenerate_sizes_give_a_single_room() {
        let world = grid_maze(0, 0, 3, 0).unwrap();
        assert_eq!(world.room_count(), 1);
        assert!(world.room(0).unwrap().exits().is_empty());
    }
}
