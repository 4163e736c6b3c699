//! Game configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Tuning values for a single campaign
///
/// These values reproduce the reference balance. Changing them shifts the
/// pacing between expansion (unity income) and the empire's counter-pressure.
#[derive(Debug, Clone)]
pub struct GameConfig {
    // === MAP ===
    /// Radius of the hexagonal map in axial rings around the origin
    ///
    /// A radius-r map holds 3r^2 + 3r + 1 tiles; the default of 3 gives 37.
    pub map_radius: i32,

    /// Inclusive lower bound of a tile's static resource yield
    pub tile_yield_min: i32,

    /// Exclusive upper bound of a tile's static resource yield
    pub tile_yield_max: i32,

    // === STARTING STATE ===
    /// Unity score at turn 1
    pub initial_unity: i32,

    /// Resource pool at turn 1
    pub initial_resources: i32,

    /// Imperial pressure at turn 1
    pub initial_pressure: i32,

    // === END CONDITIONS ===
    /// Unity score at which the movement wins
    pub win_unity_threshold: i32,

    /// Pressure score at which the movement is crushed
    pub lose_pressure_threshold: i32,

    /// Last playable turn; the game is lost once the counter passes this
    pub max_turns: u32,

    // === ECONOMY ===
    /// Flat resource income granted every end-of-turn
    pub passive_income_base: i32,

    /// Additional end-of-turn income per player-owned tile
    ///
    /// Income scales with territory count, not with per-tile yield values.
    pub income_per_tile: i32,

    /// Resources granted by spending a whole turn fundraising
    pub fundraise_amount: i32,

    /// Extra unity awarded on top of an option's reward when a tile is taken
    pub conquest_unity_bonus: i32,

    // === LOG ===
    /// Maximum entries retained in the history feed, most recent first
    pub history_cap: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_radius: 3,
            tile_yield_min: 3,
            tile_yield_max: 8,

            initial_unity: 30,
            initial_resources: 60,
            initial_pressure: 10,

            win_unity_threshold: 300,
            lose_pressure_threshold: 100,
            max_turns: 25,

            passive_income_base: 10,
            income_per_tile: 5,
            fundraise_amount: 25,
            conquest_unity_bonus: 10,

            history_cap: 8,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }
}
