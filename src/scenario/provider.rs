//! Scenario sources
//!
//! The engine never cares where a scenario came from: a static table and an
//! external generator are interchangeable behind [`ScenarioSource`]. External
//! sources that only produce narrative text and probabilities go through
//! [`ScenarioDraft`], which fills in the numeric triples with fixed defaults
//! before the scenario reaches the engine.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::core::error::Result;
use crate::core::types::{ActionKind, Delta, Terrain};
use crate::scenario::table::scenario_db;
use crate::scenario::{EventScenario, ScenarioOption};

/// Reward triple assumed when a source omits one
pub const DEFAULT_SUCCESS_REWARD: Delta = Delta {
    unity: 15,
    pressure: -5,
    resources: 5,
};

/// Penalty triple assumed when a source omits one
pub const DEFAULT_FAIL_PENALTY: Delta = Delta {
    unity: -5,
    pressure: 5,
    resources: 0,
};

/// Anything that can supply a scenario for a contested tile
///
/// Implementations may fail (an external generator can lose its connection);
/// the engine recovers from `Err` by substituting [`fallback_scenario`], so
/// a source failure never reaches the player.
pub trait ScenarioSource {
    fn pick(&self, terrain: Terrain, rng: &mut ChaCha8Rng) -> Result<EventScenario>;
}

/// The reference source: a fixed table of hand-written scenarios
#[derive(Debug, Clone)]
pub struct StaticTable {
    scenarios: Vec<EventScenario>,
}

impl StaticTable {
    pub fn new() -> Self {
        Self {
            scenarios: scenario_db(),
        }
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Default for StaticTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioSource for StaticTable {
    /// Uniform pick among the scenarios tagged for this terrain
    ///
    /// A terrain with no tailored entry degrades to the first table entry
    /// rather than failing; this call never returns `Err`.
    fn pick(&self, terrain: Terrain, rng: &mut ChaCha8Rng) -> Result<EventScenario> {
        let candidates: Vec<&EventScenario> = self
            .scenarios
            .iter()
            .filter(|s| s.applies_to(terrain))
            .collect();

        let picked = match candidates.choose(rng) {
            Some(scenario) => (*scenario).clone(),
            // No tailored entry for this terrain: degrade to a generic one
            None => match self.scenarios.first() {
                Some(scenario) => scenario.clone(),
                None => fallback_scenario(terrain),
            },
        };

        tracing::debug!("Picked scenario '{}' for {}", picked.id, terrain.label());
        Ok(picked)
    }
}

/// A partially-specified scenario as an external generator would emit it
///
/// Carries only what a narrative generator reliably produces; everything
/// numeric that is missing gets a defined default during normalization.
#[derive(Debug, Clone)]
pub struct ScenarioDraft {
    pub title: String,
    pub description: String,
    pub options: Vec<OptionDraft>,
}

#[derive(Debug, Clone)]
pub struct OptionDraft {
    pub action: ActionKind,
    pub label: String,
    pub cost: i32,
    pub success_rate: Option<f32>,
    pub success_text: Option<String>,
    pub fail_text: Option<String>,
}

impl ScenarioDraft {
    /// Normalize into a full [`EventScenario`] satisfying the engine contract
    pub fn into_scenario(self, id: String, terrain: Terrain) -> EventScenario {
        EventScenario {
            id,
            terrain: vec![terrain],
            title: self.title,
            description: self.description,
            options: self
                .options
                .into_iter()
                .map(|opt| ScenarioOption {
                    action: opt.action,
                    label: opt.label,
                    cost: opt.cost,
                    success_rate: opt.success_rate.unwrap_or(0.5),
                    success_reward: DEFAULT_SUCCESS_REWARD,
                    fail_penalty: DEFAULT_FAIL_PENALTY,
                    success_text: opt
                        .success_text
                        .unwrap_or_else(|| "The action succeeded.".to_string()),
                    fail_text: opt
                        .fail_text
                        .unwrap_or_else(|| "The action failed.".to_string()),
                })
                .collect(),
        }
    }
}

/// Built-in scenario used when a source fails outright
///
/// Generic enough to fit any terrain; always offers all three action kinds.
pub fn fallback_scenario(terrain: Terrain) -> EventScenario {
    EventScenario {
        id: "fallback".to_string(),
        terrain: vec![terrain],
        title: "Communications Cut".to_string(),
        description: "Contact with the region has been severed for now, \
                      but the locals still look to you for direction."
            .to_string(),
        options: vec![
            ScenarioOption {
                action: ActionKind::Culture,
                label: "Send a cultural envoy".to_string(),
                cost: 10,
                success_rate: 0.5,
                success_reward: Delta::new(10, 0, 0),
                fail_penalty: Delta::new(-5, 5, 0),
                success_text: "The envoy carried our goodwill through the blockade.".to_string(),
                fail_text: "The envoy could not get past the checkpoints.".to_string(),
            },
            ScenarioOption {
                action: ActionKind::Diplomacy,
                label: "Seek out the local elders".to_string(),
                cost: 20,
                success_rate: 0.6,
                success_reward: Delta::new(20, -5, 0),
                fail_penalty: Delta::new(0, 0, 0),
                success_text: "The elders agreed to work with us.".to_string(),
                fail_text: "The elders chose to wait and watch.".to_string(),
            },
            ScenarioOption {
                action: ActionKind::Protest,
                label: "Call for grassroots mobilization".to_string(),
                cost: 15,
                success_rate: 0.4,
                success_reward: Delta::new(30, 5, 0),
                fail_penalty: Delta::new(-10, 10, 0),
                success_text: "The people answered the call in great numbers.".to_string(),
                fail_text: "The mobilization was put down hard.".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn static_table_always_returns_matching_terrain() {
        let table = StaticTable::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let scenario = table.pick(Terrain::City, &mut rng).unwrap();
            assert!(scenario.applies_to(Terrain::City));
        }
    }

    #[test]
    fn every_table_entry_has_at_least_two_options() {
        for scenario in scenario_db() {
            assert!(
                scenario.options.len() >= 2,
                "scenario '{}' is under-optioned",
                scenario.id
            );
        }
    }

    #[test]
    fn table_rates_and_costs_are_sane() {
        for scenario in scenario_db() {
            for option in &scenario.options {
                assert!((0.0..=1.0).contains(&option.success_rate));
                assert!(option.cost >= 0);
            }
        }
    }

    #[test]
    fn draft_normalization_fills_defaults() {
        let draft = ScenarioDraft {
            title: "Border Incident".to_string(),
            description: "A patrol has detained our couriers.".to_string(),
            options: vec![OptionDraft {
                action: ActionKind::Diplomacy,
                label: "Negotiate their release".to_string(),
                cost: 12,
                success_rate: None,
                success_text: None,
                fail_text: None,
            }],
        };

        let scenario = draft.into_scenario("gen-1".to_string(), Terrain::Coast);
        assert!(scenario.applies_to(Terrain::Coast));

        let option = &scenario.options[0];
        assert_eq!(option.success_rate, 0.5);
        assert_eq!(option.success_reward, DEFAULT_SUCCESS_REWARD);
        assert_eq!(option.fail_penalty, DEFAULT_FAIL_PENALTY);
        assert!(!option.success_text.is_empty());
    }

    #[test]
    fn fallback_offers_all_three_actions() {
        let scenario = fallback_scenario(Terrain::Mountains);
        for action in [ActionKind::Culture, ActionKind::Diplomacy, ActionKind::Protest] {
            assert!(scenario.option_for(action).is_some());
        }
    }
}
