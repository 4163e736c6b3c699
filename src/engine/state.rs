//! Canonical game state and the history feed

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::config::GameConfig;
use crate::core::types::HexCoord;
use crate::map::HexMap;
use crate::scenario::EventScenario;

/// Lifecycle of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created but not yet started
    Intro,
    Playing,
    Victory,
    Defeat,
}

impl GameStatus {
    /// Victory and defeat are terminal: no further state changes
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Victory | GameStatus::Defeat)
    }
}

/// Tone of a history entry, used by renderers for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryKind {
    Success,
    Fail,
    Neutral,
}

/// One immutable line in the history feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub turn: u32,
    pub text: String,
    pub kind: HistoryKind,
}

/// The single source of truth for a campaign
///
/// Owned and mutated exclusively by the turn engine; renderers get shared
/// read access between operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub turn: u32,
    pub unity: i32,
    pub resources: i32,
    pub pressure: i32,
    pub map: HexMap,
    /// Tile under an in-flight scenario, if any
    pub selected: Option<HexCoord>,
    /// Scenario awaiting a player choice for the selected tile
    pub active_scenario: Option<EventScenario>,
    pub status: GameStatus,
    /// Most-recent-first, capped at `GameConfig::history_cap`
    pub history: VecDeque<HistoryEntry>,
}

impl GameState {
    pub fn new(config: &GameConfig, map: HexMap) -> Self {
        Self {
            turn: 1,
            unity: config.initial_unity,
            resources: config.initial_resources,
            pressure: config.initial_pressure,
            map,
            selected: None,
            active_scenario: None,
            status: GameStatus::Intro,
            history: VecDeque::new(),
        }
    }

    /// Prepend a history entry, truncating to the configured cap
    pub fn push_history(&mut self, cap: usize, turn: u32, text: String, kind: HistoryKind) {
        self.history.push_front(HistoryEntry { turn, text, kind });
        self.history.truncate(cap);
    }

    /// Drop any in-flight selection without applying effects
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.active_scenario = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_capped_and_newest_first() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, HexMap::new());

        for i in 0..20u32 {
            state.push_history(
                config.history_cap,
                i,
                format!("entry {}", i),
                HistoryKind::Neutral,
            );
        }

        assert_eq!(state.history.len(), config.history_cap);
        assert_eq!(state.history[0].turn, 19);
        assert_eq!(state.history[config.history_cap - 1].turn, 12);
    }
}
