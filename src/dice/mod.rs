//! Dice rolling
//!
//! Provides:
//! - Rolling N dice of S sides plus a modifier ([`DiceResult`])
//! - Chained adjustments: floors, advantage, disadvantage
//! - Ability scores (4d6, drop the lowest)
//! - Shorthand constructors for the standard dice
//! - Notation parsing ("2d6+3")
//! - Injectable random sources

mod ability;
mod error;
mod factory;
mod notation;
mod result;
mod sampler;

pub use ability::{generate_ability_score, generate_ability_scores, AbilityScore, ABILITY_NAMES};
pub use error::{InvalidArgument, NotationError, MAX_ROLL_COUNT};
pub use factory::{
    eight_sided, for_rolls, four_sided, hundred_sided, six_sided, ten_sided, twelve_sided,
    twenty_sided, Die, RollCount,
};
pub use notation::DiceNotation;
pub use result::{DiceResult, RollReport};
pub use sampler::{MidpointSampler, RngSampler, Sampler, SequenceSampler, ThreadSampler};
