//! Event scenarios - the contested-tile encounters
//!
//! A scenario is an immutable value object: a terrain-tagged situation with
//! two or more costed, probabilistic options. Scenarios come from a
//! [`provider::ScenarioSource`]; the reference source is the static table in
//! [`table`].

pub mod provider;
pub mod table;

pub use provider::{fallback_scenario, ScenarioSource, StaticTable};

use serde::{Deserialize, Serialize};

use crate::core::types::{ActionKind, Delta, Terrain};

/// One way the player can respond to a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub action: ActionKind,
    pub label: String,
    /// Resource cost, deducted only when the option is actually affordable
    pub cost: i32,
    /// Success probability in [0, 1]
    pub success_rate: f32,
    pub success_reward: Delta,
    pub fail_penalty: Delta,
    pub success_text: String,
    pub fail_text: String,
}

/// A contested-tile event with its available responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventScenario {
    pub id: String,
    /// Terrain kinds this scenario can appear on
    pub terrain: Vec<Terrain>,
    pub title: String,
    pub description: String,
    /// Always at least two entries
    pub options: Vec<ScenarioOption>,
}

impl EventScenario {
    pub fn applies_to(&self, terrain: Terrain) -> bool {
        self.terrain.contains(&terrain)
    }

    /// Look up the option matching a chosen action kind
    pub fn option_for(&self, action: ActionKind) -> Option<&ScenarioOption> {
        self.options.iter().find(|o| o.action == action)
    }
}
