//! Ability score generation (roll four, drop the lowest)

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{check_side_count, InvalidArgument};
use super::sampler::Sampler;

/// The six abilities, in the order a character sheet lists them
pub const ABILITY_NAMES: [&str; 6] = ["STR", "DEX", "CON", "INT", "WIS", "CHA"];

/// Four rolls and the sum of the best three
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    rolls: [u32; 4],
    total: u32,
}

impl AbilityScore {
    /// Score a set of four rolls
    pub fn from_rolls(rolls: [u32; 4]) -> Self {
        let mut sorted = rolls;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let total = sorted[..3].iter().sum();
        Self { rolls, total }
    }

    /// The four rolls in draw order
    pub fn rolls(&self) -> [u32; 4] {
        self.rolls
    }

    /// Sum of the three highest rolls
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The roll that was discarded
    pub fn dropped(&self) -> u32 {
        self.rolls.iter().copied().min().unwrap_or_default()
    }
}

impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.rolls;
        write!(f, "{} ({}, {}, {}, {}; dropped {})", self.total, a, b, c, d, self.dropped())
    }
}

/// Roll one ability score on a die of `sides` sides
pub fn generate_ability_score<S: Sampler>(
    sampler: &mut S,
    sides: i64,
) -> Result<AbilityScore, InvalidArgument> {
    let sides = check_side_count(sides)?;
    Ok(roll_score(sampler, sides))
}

/// Roll a full set of six scores, one per entry of [`ABILITY_NAMES`]
pub fn generate_ability_scores<S: Sampler>(
    sampler: &mut S,
    sides: i64,
) -> Result<[AbilityScore; 6], InvalidArgument> {
    let sides = check_side_count(sides)?;
    Ok(std::array::from_fn(|_| roll_score(sampler, sides)))
}

pub(crate) fn roll_score<S: Sampler>(sampler: &mut S, sides: u32) -> AbilityScore {
    let rolls = std::array::from_fn(|_| sampler.sample(sides));
    let score = AbilityScore::from_rolls(rolls);
    debug!(sides, total = score.total, "rolled ability score");
    score
}
