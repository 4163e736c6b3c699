//! Property and reference tests for map generation

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use reclaim::core::config::GameConfig;
use reclaim::core::types::{Faction, HexCoord, Terrain};
use reclaim::map::generate_map;

fn tile_count(radius: i64) -> usize {
    (3 * radius * radius + 3 * radius + 1) as usize
}

proptest! {
    #[test]
    fn map_size_matches_hex_formula(radius in 0i32..=8, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let map = generate_map(radius, &GameConfig::default(), &mut rng);

        // Keyed storage makes the count a distinct-coordinate count too
        prop_assert_eq!(map.len(), tile_count(radius as i64));
    }

    #[test]
    fn exactly_one_player_tile_at_the_origin(radius in 0i32..=8, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let map = generate_map(radius, &GameConfig::default(), &mut rng);

        prop_assert_eq!(map.player_tile_count(), 1);

        let origin = map.get(HexCoord::ORIGIN).expect("origin tile must exist");
        prop_assert_eq!(origin.owner, Faction::Player);
        prop_assert_eq!(origin.terrain, Terrain::City);
    }

    #[test]
    fn all_coordinates_lie_inside_the_region(radius in 0i32..=8, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let map = generate_map(radius, &GameConfig::default(), &mut rng);

        for tile in map.iter() {
            let q = tile.coord.q;
            let r = tile.coord.r;
            prop_assert!((-radius..=radius).contains(&q));
            prop_assert!(r >= (-radius).max(-q - radius));
            prop_assert!(r <= radius.min(-q + radius));
        }
    }
}

#[test]
fn default_radius_map_is_37_tiles() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let config = GameConfig::default();
    let map = generate_map(config.map_radius, &config, &mut rng);
    assert_eq!(map.len(), 37);
}
