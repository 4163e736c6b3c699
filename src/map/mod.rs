//! Strategic hex map - tiles, ownership, and generation

pub mod generator;

pub use generator::generate_map;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{Faction, HexCoord, Terrain};

/// A single hex tile on the strategic map
///
/// Everything except `owner` is frozen at generation time. Ownership moves
/// from the empire to the player at most once; tiles are never lost back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub coord: HexCoord,
    pub terrain: Terrain,
    pub owner: Faction,
    /// Static per-tile resource yield, rolled once at generation.
    /// Exposed as data; end-of-turn income currently scales with tile
    /// count only and does not read this field.
    pub yield_value: i32,
}

impl Tile {
    pub fn is_player_owned(&self) -> bool {
        self.owner == Faction::Player
    }
}

/// The full strategic map, keyed by axial coordinate
///
/// Serializes as a flat tile list; JSON object keys must be strings, which
/// coordinate keys are not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct HexMap {
    tiles: AHashMap<HexCoord, Tile>,
}

impl From<Vec<Tile>> for HexMap {
    fn from(tiles: Vec<Tile>) -> Self {
        let mut map = HexMap::new();
        for tile in tiles {
            map.insert(tile);
        }
        map
    }
}

impl From<HexMap> for Vec<Tile> {
    fn from(map: HexMap) -> Self {
        map.tiles.into_values().collect()
    }
}

impl HexMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.coord, tile);
    }

    pub fn get(&self, coord: HexCoord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Number of tiles currently controlled by the player
    pub fn player_tile_count(&self) -> usize {
        self.tiles.values().filter(|t| t.is_player_owned()).count()
    }

    /// Flip a tile to player control. Returns false if the coordinate is
    /// unknown or the tile was already player-owned.
    pub fn conquer(&mut self, coord: HexCoord) -> bool {
        match self.tiles.get_mut(&coord) {
            Some(tile) if tile.owner == Faction::Empire => {
                tile.owner = Faction::Player;
                true
            }
            _ => false,
        }
    }
}
