//! The turn engine
//!
//! Owns the canonical [`GameState`] and exposes the full set of player
//! operations. Every operation runs to completion and leaves the state
//! consistent; operations invoked when their preconditions do not hold are
//! silent no-ops, matching disabled affordances in the interaction model.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::GameConfig;
use crate::core::types::{ActionKind, HexCoord};
use crate::engine::resolve::{resolve_option, EventOutcome};
use crate::engine::state::{GameState, GameStatus, HistoryKind};
use crate::map::generate_map;
use crate::scenario::{fallback_scenario, EventScenario, ScenarioSource};

/// End-game evaluation, a pure function of the scores and the turn counter
///
/// Checked after every mutating operation, not just at turn boundaries: a
/// single scenario resolution can cross a threshold mid-turn. Priority is
/// victory first, then pressure defeat, then turn exhaustion.
pub fn evaluate_end_conditions(
    config: &GameConfig,
    unity: i32,
    pressure: i32,
    turn: u32,
    current: GameStatus,
) -> GameStatus {
    if unity >= config.win_unity_threshold {
        GameStatus::Victory
    } else if pressure >= config.lose_pressure_threshold {
        GameStatus::Defeat
    } else if turn > config.max_turns {
        GameStatus::Defeat
    } else {
        current
    }
}

/// The state machine driving a campaign
pub struct TurnEngine {
    config: GameConfig,
    state: GameState,
    rng: ChaCha8Rng,
    source: Box<dyn ScenarioSource>,
}

impl TurnEngine {
    /// Build a fresh campaign: generate the map once, seed the RNG
    pub fn new(config: GameConfig, seed: u64, source: Box<dyn ScenarioSource>) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let map = generate_map(config.map_radius, &config, &mut rng);
        let state = GameState::new(&config, map);

        tracing::info!(
            "New campaign: seed {}, {} tiles, {} turns to win",
            seed,
            state.map.len(),
            config.max_turns
        );

        Self {
            config,
            state,
            rng,
            source,
        }
    }

    /// Read access for renderers; state only changes between operations
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Scenario awaiting a choice, if a tile is selected
    pub fn active_scenario(&self) -> Option<&EventScenario> {
        self.state.active_scenario.as_ref()
    }

    /// Leave the intro screen and begin playing
    pub fn start(&mut self) -> bool {
        if self.state.status != GameStatus::Intro {
            return false;
        }
        self.state.status = GameStatus::Playing;
        true
    }

    /// Select a contested tile and draw a scenario for its terrain
    ///
    /// No-op unless the game is in progress and the tile exists and is not
    /// already player-owned. A new selection replaces any pending one; the
    /// replaced selection is discarded without effect. A source failure is
    /// absorbed by substituting the built-in fallback scenario.
    pub fn select_tile(&mut self, coord: HexCoord) -> Option<&EventScenario> {
        if self.state.status != GameStatus::Playing {
            return None;
        }

        let terrain = match self.state.map.get(coord) {
            Some(tile) if !tile.is_player_owned() => tile.terrain,
            _ => return None,
        };

        let scenario = match self.source.pick(terrain, &mut self.rng) {
            Ok(scenario) => scenario,
            Err(err) => {
                tracing::warn!("Scenario source failed ({}), using fallback", err);
                fallback_scenario(terrain)
            }
        };

        self.state.selected = Some(coord);
        self.state.active_scenario = Some(scenario);
        self.state.active_scenario.as_ref()
    }

    /// Drop the pending selection without applying any effect or cost
    pub fn cancel_selection(&mut self) {
        self.state.clear_selection();
    }

    /// Commit to one option of the active scenario and resolve it
    ///
    /// Affordability is enforced here: an option costing more than the
    /// current resource pool is refused before anything is deducted or
    /// rolled, so resources never go negative. On success the selected tile
    /// flips to player control and the conquest unity bonus is folded into
    /// the applied delta. Either way the selection is cleared, the outcome
    /// is logged, and end conditions are re-checked.
    pub fn choose_option(&mut self, action: ActionKind) -> Option<EventOutcome> {
        if self.state.status != GameStatus::Playing {
            return None;
        }

        let coord = self.state.selected?;
        let option = self
            .state
            .active_scenario
            .as_ref()
            .and_then(|s| s.option_for(action))?
            .clone();

        if option.cost > self.state.resources {
            tracing::debug!(
                "Refusing '{}': costs {} with {} in the pool",
                option.label,
                option.cost,
                self.state.resources
            );
            return None;
        }

        self.state.resources -= option.cost;

        let mut outcome = resolve_option(&option, &mut self.rng);

        if outcome.success && self.state.map.conquer(coord) {
            // Bonus for bringing territory under the movement's control
            outcome.delta.unity += self.config.conquest_unity_bonus;
        }

        self.state.unity += outcome.delta.unity;
        self.state.pressure += outcome.delta.pressure;
        self.state.resources += outcome.delta.resources;

        let kind = if outcome.success {
            HistoryKind::Success
        } else {
            HistoryKind::Fail
        };
        let turn = self.state.turn;
        self.state
            .push_history(self.config.history_cap, turn, outcome.message.clone(), kind);

        self.state.clear_selection();
        self.check_end_game();

        Some(outcome)
    }

    /// Close out the turn: collect passive income, let pressure creep up
    ///
    /// Income is a flat base plus a per-tile amount for each player-held
    /// tile; pressure creep grows with the turn number as the empire takes
    /// the movement more seriously.
    pub fn end_turn(&mut self) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }

        let owned = self.state.map.player_tile_count() as i32;
        let income = self.config.passive_income_base + self.config.income_per_tile * owned;
        let creep = (self.state.turn / 2 + 2) as i32;

        let turn = self.state.turn;
        self.state.turn += 1;
        self.state.resources += income;
        self.state.pressure += creep;

        self.state.push_history(
            self.config.history_cap,
            turn,
            format!(
                "Turn ended. Gained {} resources. Imperial pressure rose by {}.",
                income, creep
            ),
            HistoryKind::Neutral,
        );

        self.check_end_game();
        true
    }

    /// Spend the turn raising funds instead of contesting a tile
    ///
    /// The low-resource escape valve: always available while playing,
    /// whatever the current pool.
    pub fn fundraise(&mut self) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }

        let amount = self.config.fundraise_amount;
        let turn = self.state.turn;
        self.state.turn += 1;
        self.state.resources += amount;

        self.state.push_history(
            self.config.history_cap,
            turn,
            format!("Held an emergency fundraiser. Gained {} resources.", amount),
            HistoryKind::Neutral,
        );

        self.check_end_game();
        true
    }

    fn check_end_game(&mut self) {
        let next = evaluate_end_conditions(
            &self.config,
            self.state.unity,
            self.state.pressure,
            self.state.turn,
            self.state.status,
        );

        if next != self.state.status {
            tracing::info!(
                "Campaign over on turn {}: {:?} (unity {}, pressure {})",
                self.state.turn,
                next,
                self.state.unity,
                self.state.pressure
            );
            self.state.status = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn victory_takes_priority_over_defeat() {
        let config = GameConfig::default();
        // Both thresholds crossed at once: victory wins the tie
        let status =
            evaluate_end_conditions(&config, 300, 100, 10, GameStatus::Playing);
        assert_eq!(status, GameStatus::Victory);
    }

    #[test]
    fn end_condition_reference_cases() {
        let config = GameConfig::default();

        assert_eq!(
            evaluate_end_conditions(&config, 300, 50, 10, GameStatus::Playing),
            GameStatus::Victory
        );
        assert_eq!(
            evaluate_end_conditions(&config, 50, 100, 10, GameStatus::Playing),
            GameStatus::Defeat
        );
        assert_eq!(
            evaluate_end_conditions(&config, 50, 50, 26, GameStatus::Playing),
            GameStatus::Defeat
        );
        assert_eq!(
            evaluate_end_conditions(&config, 50, 50, 25, GameStatus::Playing),
            GameStatus::Playing
        );
    }
}
