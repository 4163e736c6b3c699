//! Outcome resolution
//!
//! The single point where an action's success or failure is decided. Kept
//! free of game state so resolution is a pure function of the option and
//! the RNG draw.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::Delta;
use crate::scenario::ScenarioOption;

/// The resolved result of one chosen scenario option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOutcome {
    pub success: bool,
    pub message: String,
    /// The adjustment actually applied, conquest bonus included
    pub delta: Delta,
}

/// Roll one option: success iff the uniform draw lands below the rate
pub fn resolve_option(option: &ScenarioOption, rng: &mut ChaCha8Rng) -> EventOutcome {
    let roll: f32 = rng.gen();
    let success = roll < option.success_rate;

    let (delta, message) = if success {
        (option.success_reward, option.success_text.clone())
    } else {
        (option.fail_penalty, option.fail_text.clone())
    };

    tracing::debug!(
        "Resolved {} (roll {:.3} vs rate {:.2}): {}",
        option.label,
        roll,
        option.success_rate,
        if success { "success" } else { "failure" }
    );

    EventOutcome {
        success,
        message,
        delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ActionKind;
    use rand::SeedableRng;

    fn option_with_rate(rate: f32) -> ScenarioOption {
        ScenarioOption {
            action: ActionKind::Culture,
            label: "test".to_string(),
            cost: 10,
            success_rate: rate,
            success_reward: Delta::new(20, -2, 3),
            fail_penalty: Delta::new(-4, 6, 0),
            success_text: "it worked".to_string(),
            fail_text: "it did not".to_string(),
        }
    }

    #[test]
    fn certain_option_always_succeeds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let option = option_with_rate(1.0);

        for _ in 0..100 {
            let outcome = resolve_option(&option, &mut rng);
            assert!(outcome.success);
            assert_eq!(outcome.delta, option.success_reward);
            assert_eq!(outcome.message, "it worked");
        }
    }

    #[test]
    fn impossible_option_always_fails() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let option = option_with_rate(0.0);

        for _ in 0..100 {
            let outcome = resolve_option(&option, &mut rng);
            assert!(!outcome.success);
            assert_eq!(outcome.delta, option.fail_penalty);
            assert_eq!(outcome.message, "it did not");
        }
    }

    #[test]
    fn same_seed_same_outcome() {
        let option = option_with_rate(0.5);

        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..20 {
            let oa = resolve_option(&option, &mut a);
            let ob = resolve_option(&option, &mut b);
            assert_eq!(oa.success, ob.success);
        }
    }
}
