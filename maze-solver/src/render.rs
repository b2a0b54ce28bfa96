use std::collections::HashMap;
use std::fmt::Write;

use crate::direction::Direction;
use crate::world::{Room, World};

/// Draws the world as ASCII art, north up. Rooms are placed by their
/// coordinates; rooms without coordinates are listed after the grid.
pub fn render_ascii(world: &World) -> String {
    let mut out = String::new();
    let placed: HashMap<(i32, i32), &Room> = world
        .rooms()
        .filter_map(|room| room.coords.map(|c| (c, room)))
        .collect();

    if !placed.is_empty() {
        let width = world
            .room_ids()
            .max()
            .map(|id| id.to_string().len())
            .unwrap_or(0)
            .max(3);
        let xs = placed.keys().map(|&(x, _)| x);
        let (min_x, max_x) = (xs.clone().min().unwrap_or(0), xs.max().unwrap_or(0));
        let ys = placed.keys().map(|&(_, y)| y);
        let (min_y, max_y) = (ys.clone().min().unwrap_or(0), ys.max().unwrap_or(0));

        for y in (min_y..=max_y).rev() {
            let mut rooms_line = String::new();
            let mut south_line = String::new();
            for x in min_x..=max_x {
                match placed.get(&(x, y)) {
                    Some(room) => {
                        let _ = write!(rooms_line, "{:^width$}", room.id);
                        rooms_line.push(if room.exit(Direction::East).is_some() { '-' } else { ' ' });
                        let bar = if room.exit(Direction::South).is_some() { "|" } else { "" };
                        let _ = write!(south_line, "{bar:^width$} ");
                    }
                    None => {
                        let _ = write!(rooms_line, "{:width$} ", "");
                        let _ = write!(south_line, "{:width$} ", "");
                    }
                }
            }
            out.push_str(rooms_line.trim_end());
            out.push('\n');
            if y > min_y {
                out.push_str(south_line.trim_end());
                out.push('\n');
            }
        }
    }

    let unplaced: Vec<&Room> = world.rooms().filter(|room| room.coords.is_none()).collect();
    if !unplaced.is_empty() {
        out.push_str("unplaced rooms:\n");
        for room in unplaced {
            let exits: Vec<String> = room
                .exit_map()
                .iter()
                .map(|(d, to)| format!("{d}->{to}"))
                .collect();
            let _ = writeln!(out, "{}: {}", room.id, exits.join(" "));
        }
    }
    out
}
