//! JSON map files.
//!
//! ```json
//! {
//!   "startingRoom": 0,
//!   "rooms": [
//!     { "id": 0, "coords": [0, 0], "exits": { "n": 1 } },
//!     { "id": 1, "coords": [0, 1], "exits": { "s": 0 } }
//!   ]
//! }
//! ```
//!
//! `startingRoom` defaults to the lowest room id, `coords` may be omitted.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::direction::Direction;
use crate::error::MapError;
use crate::world::{Room, RoomId, World};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    starting_room: Option<RoomId>,
    rooms: Vec<RoomEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RoomEntry {
    id: RoomId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coords: Option<(i32, i32)>,
    #[serde(default)]
    exits: BTreeMap<String, RoomId>,
}

pub fn load_world(path: impl AsRef<Path>) -> Result<World, MapError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read map file");
    parse_world(&text)
}

pub fn parse_world(text: &str) -> Result<World, MapError> {
    let document: MapDocument = serde_json::from_str(text)?;
    let starting_room = document
        .starting_room
        .or_else(|| document.rooms.iter().map(|r| r.id).min())
        .ok_or(MapError::Empty)?;

    let mut rooms = Vec::with_capacity(document.rooms.len());
    for entry in document.rooms {
        let mut room = Room::new(entry.id, entry.coords);
        for (key, to) in entry.exits {
            let direction: Direction = key.parse().map_err(|_| MapError::UnknownDirection {
                room: entry.id,
                key: key.clone(),
            })?;
            if room.exit(direction).is_some() {
                return Err(MapError::DuplicateExit {
                    room: entry.id,
                    direction,
                });
            }
            room.connect(direction, to);
        }
        rooms.push(room);
    }
    World::new(rooms, starting_room)
}

pub fn to_json(world: &World) -> Result<String, MapError> {
    let document = MapDocument {
        starting_room: Some(world.starting_room()),
        rooms: world
            .rooms()
            .map(|room| RoomEntry {
                id: room.id,
                coords: room.coords,
                exits: room
                    .exit_map()
                    .iter()
                    .map(|(d, &to)| (d.to_string(), to))
                    .collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn bundled_maps_load() {
        let maps = [
            (include_str!("../maps/line.json"), 3),
            (include_str!("../maps/cross.json"), 9),
            (include_str!("../maps/loop.json"), 4),
            (include_str!("../maps/loop_fork.json"), 7),
        ];
        for (text, rooms) in maps {
            let world = parse_world(text).unwrap();
            assert_eq!(world.room_count(), rooms);
            assert_eq!(world.starting_room(), 0);
        }
    }

    #[test]
    fn bundled_maps_match_fixtures() {
        assert_eq!(
            parse_world(include_str!("../maps/line.json")).unwrap(),
            test_support::line3()
        );
        assert_eq!(
            parse_world(include_str!("../maps/loop_fork.json")).unwrap(),
            test_support::loop_fork()
        );
    }

    #[test]
    fn starting_room_defaults_to_lowest_id() {
        let world = parse_world(
            r#"{ "rooms": [ { "id": 5, "exits": { "w": 3 } }, { "id": 3, "exits": { "e": 5 } } ] }"#,
        )
        .unwrap();
        assert_eq!(world.starting_room(), 3);
        assert_eq!(world.room(5).unwrap().coords, None);
    }

    #[test]
    fn bad_direction_is_rejected() {
        let err = parse_world(r#"{ "rooms": [ { "id": 0, "exits": { "up": 0 } } ] }"#).unwrap_err();
        assert!(matches!(err, MapError::UnknownDirection { room: 0, ref key } if key == "up"));
    }

    #[test]
    fn same_direction_under_two_keys_is_rejected() {
        let err = parse_world(
            r#"{ "rooms": [ { "id": 0, "exits": { "n": 1, "north": 2 } }, { "id": 1 }, { "id": 2 } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MapError::DuplicateExit {
                room: 0,
                direction: Direction::North
            }
        ));
    }

    #[test]
    fn one_way_map_is_rejected() {
        let err = parse_world(
            r#"{ "rooms": [ { "id": 0, "exits": { "e": 1, "n": 2 } }, { "id": 1 }, { "id": 2, "exits": { "s": 0 } } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MapError::OneWayExit { room: 0, target: 1, .. }));
    }

    #[test]
    fn empty_and_malformed_maps_are_rejected() {
        assert!(matches!(parse_world(r#"{ "rooms": [] }"#), Err(MapError::Empty)));
        assert!(matches!(parse_world("not json"), Err(MapError::Json(_))));
    }

    #[test]
    fn json_round_trips_a_world() {
        let world = test_support::cross();
        let text = to_json(&world).unwrap();
        assert_eq!(parse_world(&text).unwrap(), world);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_world("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
