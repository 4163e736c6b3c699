//! Map generation
//!
//! Builds the hexagonal starting map: one player-held city at the origin,
//! everything else under imperial control with random terrain.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::GameConfig;
use crate::core::types::{Faction, HexCoord, Terrain};
use crate::map::{HexMap, Tile};

/// Generate the starting map for a hexagonal region of the given radius
///
/// Covers every axial coordinate (q, r) with
/// `max(-radius, -q-radius) <= r <= min(radius, -q+radius)`, which yields
/// exactly 3r^2 + 3r + 1 tiles. Deterministic for a fixed RNG seed.
pub fn generate_map(radius: i32, config: &GameConfig, rng: &mut ChaCha8Rng) -> HexMap {
    let mut map = HexMap::new();

    for q in -radius..=radius {
        let r1 = (-radius).max(-q - radius);
        let r2 = radius.min(-q + radius);
        for r in r1..=r2 {
            let coord = HexCoord::new(q, r);
            let is_origin = coord == HexCoord::ORIGIN;

            let tile = Tile {
                coord,
                terrain: if is_origin {
                    // The movement starts from the capital
                    Terrain::City
                } else {
                    Terrain::ALL[rng.gen_range(0..Terrain::ALL.len())]
                },
                owner: if is_origin {
                    Faction::Player
                } else {
                    Faction::Empire
                },
                yield_value: rng.gen_range(config.tile_yield_min..config.tile_yield_max),
            };

            map.insert(tile);
        }
    }

    tracing::debug!(
        "Generated radius-{} map with {} tiles",
        radius,
        map.len()
    );

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn generate(radius: i32, seed: u64) -> HexMap {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_map(radius, &GameConfig::default(), &mut rng)
    }

    #[test]
    fn radius_zero_is_a_lone_capital() {
        let map = generate(0, 1);
        assert_eq!(map.len(), 1);

        let origin = map.get(HexCoord::ORIGIN).unwrap();
        assert_eq!(origin.terrain, Terrain::City);
        assert_eq!(origin.owner, Faction::Player);
    }

    #[test]
    fn reference_radius_has_37_tiles() {
        let map = generate(3, 42);
        assert_eq!(map.len(), 37);
        assert_eq!(map.player_tile_count(), 1);
    }

    #[test]
    fn yields_stay_in_configured_range() {
        let config = GameConfig::default();
        let map = generate(4, 7);
        for tile in map.iter() {
            assert!(tile.yield_value >= config.tile_yield_min);
            assert!(tile.yield_value < config.tile_yield_max);
        }
    }

    #[test]
    fn same_seed_same_map() {
        let a = generate(3, 99);
        let b = generate(3, 99);
        for tile in a.iter() {
            let other = b.get(tile.coord).unwrap();
            assert_eq!(tile.terrain, other.terrain);
            assert_eq!(tile.yield_value, other.yield_value);
        }
    }
}
