//! The static scenario table
//!
//! Hand-tuned encounters grouped by terrain. Protest is strong but risky on
//! plains and in the mountains, weak in the heavily policed cities; diplomacy
//! and commerce pay best near the ports and in the capital.

use crate::core::types::{ActionKind, Delta, Terrain};
use crate::scenario::{EventScenario, ScenarioOption};

fn option(
    action: ActionKind,
    label: &str,
    cost: i32,
    success_rate: f32,
    success_reward: Delta,
    fail_penalty: Delta,
    success_text: &str,
    fail_text: &str,
) -> ScenarioOption {
    ScenarioOption {
        action,
        label: label.to_string(),
        cost,
        success_rate,
        success_reward,
        fail_penalty,
        success_text: success_text.to_string(),
        fail_text: fail_text.to_string(),
    }
}

/// Build the full scenario table
pub fn scenario_db() -> Vec<EventScenario> {
    vec![
        // --- PLAINS ---
        EventScenario {
            id: "plains_harvest".to_string(),
            terrain: vec![Terrain::Plains],
            title: "Harvest Festival".to_string(),
            description: "The farmers are preparing their annual harvest festival, \
                          a rare chance to weave our symbols into the celebration."
                .to_string(),
            options: vec![
                option(
                    ActionKind::Culture,
                    "Sponsor traditional song and dance",
                    15,
                    0.8,
                    Delta::new(25, 0, 5),
                    Delta::new(0, 2, 0),
                    "The old songs carried across the fields; people wept as they \
                     sang, and the sense of belonging surged.",
                    "The performance was read as too political, and some of the \
                     village elders took offense.",
                ),
                option(
                    ActionKind::Protest,
                    "Seize the stage for an independence speech",
                    10,
                    0.4,
                    Delta::new(40, 5, 0),
                    Delta::new(-5, 10, 0),
                    "Your speech set the crowd alight; the cheering drowned out \
                     the festival drums.",
                    "Imperial police cut the speech short, and a chill settled \
                     over the fairground.",
                ),
            ],
        },
        EventScenario {
            id: "plains_land".to_string(),
            terrain: vec![Terrain::Plains],
            title: "Land Seizure Order".to_string(),
            description: "The imperial government plans to expropriate this fertile \
                          farmland for a factory. The furious farmers look to you \
                          for guidance."
                .to_string(),
            options: vec![
                option(
                    ActionKind::Diplomacy,
                    "Retain a legal team and sue",
                    30,
                    0.6,
                    Delta::new(20, -5, 10),
                    Delta::new(5, 0, 0),
                    "The lawsuit stalled the construction, and we are now seen as \
                     defenders of the people's rights.",
                    "The court threw the case out, but the effort earned us a \
                     measure of respect.",
                ),
                option(
                    ActionKind::Protest,
                    "Organize a peaceful land watch",
                    15,
                    0.5,
                    Delta::new(35, 10, 0),
                    Delta::new(-10, 15, 0),
                    "Hundreds of farmers stood hand in hand over their fields; the \
                     sight forced the government to pause the seizure.",
                    "Riot troops cleared the fields by force. Many farmers were \
                     hurt, and fear is spreading.",
                ),
            ],
        },
        // --- CITY ---
        EventScenario {
            id: "city_university".to_string(),
            terrain: vec![Terrain::City],
            title: "Campus Currents".to_string(),
            description: "Students in the capital are secretly passing around banned \
                          books on self-determination, but the administration has \
                          begun to crack down."
                .to_string(),
            options: vec![
                option(
                    ActionKind::Culture,
                    "Host an academic symposium",
                    20,
                    0.7,
                    Delta::new(30, 5, 5),
                    Delta::new(0, 5, 0),
                    "Under scholarly cover, the spark caught in the younger \
                     generation. Future leaders are being made.",
                    "The symposium was shut down and the books confiscated, but \
                     there was no fear left in the students' eyes.",
                ),
                option(
                    ActionKind::Protest,
                    "Call a campus strike",
                    25,
                    0.3, // Hard to pull off under the capital's surveillance
                    Delta::new(50, 15, 0),
                    Delta::new(-10, 20, 0),
                    "Universities across the city walked out together, shaking the \
                     education ministry.",
                    "The ringleaders were expelled, parents panicked, and the \
                     movement took a hit.",
                ),
            ],
        },
        EventScenario {
            id: "city_trade".to_string(),
            terrain: vec![Terrain::City],
            title: "Chamber of Commerce Gala".to_string(),
            description: "Foreign investors and imperial officials will both attend \
                          the gala, an opening to court outside sympathy."
                .to_string(),
            options: vec![
                option(
                    ActionKind::Diplomacy,
                    "Deliver an open petition",
                    40,
                    0.6,
                    Delta::new(15, -10, 30),
                    Delta::new(0, 0, 0),
                    "A foreign consul accepted the petition and voiced real \
                     concern over our situation.",
                    "We were turned away at the door, but at least the attempt \
                     made some noise.",
                ),
                option(
                    ActionKind::Protest,
                    "Hold a candlelight vigil outside",
                    10,
                    0.5,
                    Delta::new(20, 5, 0),
                    Delta::new(-5, 5, 0),
                    "The candlelight moved passers-by and reporters alike; the \
                     international press picked up the story.",
                    "Police dispersed the crowd on a traffic pretext, and no one \
                     heard our demands.",
                ),
            ],
        },
        EventScenario {
            id: "city_coop".to_string(),
            terrain: vec![Terrain::City],
            title: "Mutual Aid Cooperative".to_string(),
            description: "To shore up local shops squeezed out by imperial firms, \
                          townspeople propose a mutual-aid economy."
                .to_string(),
            options: vec![
                option(
                    ActionKind::Diplomacy,
                    "Broker the merchants together",
                    15,
                    0.8,
                    Delta::new(10, 0, 40),
                    Delta::new(0, 0, 0),
                    "The cooperative took shape, and a steady stream of funds now \
                     supports the movement.",
                    "The merchants were too afraid of reprisals to join.",
                ),
                option(
                    ActionKind::Culture,
                    "Issue a community scrip",
                    20,
                    0.6,
                    Delta::new(30, 10, 20),
                    Delta::new(-5, 10, 0),
                    "The scrip bound the community together; people now go out of \
                     their way to trade with one another.",
                    "The imperial treasury declared the scrip illegal and seized \
                     the printing plates.",
                ),
            ],
        },
        // --- MOUNTAINS ---
        EventScenario {
            id: "mountain_mines".to_string(),
            terrain: vec![Terrain::Mountains],
            title: "Rights at the Mines".to_string(),
            description: "The miners are done with brutal conditions and imperial \
                          extraction, and they want a better life."
                .to_string(),
            options: vec![
                option(
                    ActionKind::Protest,
                    "Organize a miners' union",
                    20,
                    0.7, // The highlands favor direct action
                    Delta::new(35, 10, 10),
                    Delta::new(-5, 10, 0),
                    "The union stood, forced concessions from the operators, and \
                     the miners' morale soared.",
                    "The operators refused to recognize the union and threatened \
                     to sack its leaders.",
                ),
                option(
                    ActionKind::Diplomacy,
                    "Parley with the clan elders",
                    15,
                    0.8,
                    Delta::new(25, 0, 5),
                    Delta::new(0, 0, 0),
                    "The elders pledged their support; the highlands are now a \
                     solid rear guard.",
                    "The elders kept their neutrality, unwilling to be drawn into \
                     politics.",
                ),
            ],
        },
        // --- COAST ---
        EventScenario {
            id: "coast_culture".to_string(),
            terrain: vec![Terrain::Coast],
            title: "Aid from Across the Sea".to_string(),
            description: "A freighter from a free country has docked, its crew \
                          carrying donated national literature and school supplies \
                          from the diaspora."
                .to_string(),
            options: vec![
                option(
                    ActionKind::Diplomacy,
                    "Lobby the harbor officials",
                    25,
                    0.6,
                    Delta::new(20, 0, 10),
                    Delta::new(-5, 5, 0),
                    "A few officials saw the worth of preserving the culture and \
                     quietly waved the cargo through.",
                    "The officials, fearing their superiors, refused us.",
                ),
                option(
                    ActionKind::Culture,
                    "Muster volunteers to carry the cargo",
                    15,
                    0.5,
                    Delta::new(30, 5, 0),
                    Delta::new(-10, 10, 0),
                    "Working shoulder to shoulder, we got every crate of books out \
                     of the harbor.",
                    "A patrol spotted us and the operation had to be abandoned.",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_terrain_has_a_tailored_scenario() {
        let db = scenario_db();
        for terrain in Terrain::ALL {
            assert!(
                db.iter().any(|s| s.applies_to(terrain)),
                "no scenario covers {}",
                terrain.label()
            );
        }
    }

    #[test]
    fn scenario_ids_are_unique() {
        let db = scenario_db();
        for (i, a) in db.iter().enumerate() {
            for b in &db[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
