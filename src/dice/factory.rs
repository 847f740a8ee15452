//! Shorthand constructors for the standard polyhedral dice
//!
//! ```
//! use diceroll::dice;
//!
//! let damage = dice::eight_sided(2, 3).unwrap();
//! let attack = dice::for_rolls(1).unwrap().twenty_sided(5).unwrap();
//! assert!(damage.total() >= 5 && attack.total() >= 6);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{check_roll_count, InvalidArgument};
use super::result::DiceResult;
use super::sampler::Sampler;

/// The standard dice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl Die {
    /// Get all standard dice
    pub fn all() -> &'static [Die] {
        &[
            Die::D4,
            Die::D6,
            Die::D8,
            Die::D10,
            Die::D12,
            Die::D20,
            Die::D100,
        ]
    }

    /// Faces on this die
    pub fn sides(self) -> u32 {
        match self {
            Die::D4 => 4,
            Die::D6 => 6,
            Die::D8 => 8,
            Die::D10 => 10,
            Die::D12 => 12,
            Die::D20 => 20,
            Die::D100 => 100,
        }
    }

    /// Roll `roll_count` of this die using the thread-local generator
    pub fn roll(self, roll_count: i64, modifier: i64) -> Result<DiceResult, InvalidArgument> {
        DiceResult::roll(roll_count, i64::from(self.sides()), modifier)
    }

    /// Roll `roll_count` of this die using the given sampler
    pub fn roll_with<S: Sampler>(
        self,
        sampler: S,
        roll_count: i64,
        modifier: i64,
    ) -> Result<DiceResult<S>, InvalidArgument> {
        DiceResult::roll_with(sampler, roll_count, i64::from(self.sides()), modifier)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Roll d4s
pub fn four_sided(roll_count: i64, modifier: i64) -> Result<DiceResult, InvalidArgument> {
    Die::D4.roll(roll_count, modifier)
}

/// Roll d6s
pub fn six_sided(roll_count: i64, modifier: i64) -> Result<DiceResult, InvalidArgument> {
    Die::D6.roll(roll_count, modifier)
}

/// Roll d8s
pub fn eight_sided(roll_count: i64, modifier: i64) -> Result<DiceResult, InvalidArgument> {
    Die::D8.roll(roll_count, modifier)
}

/// Roll d10s
pub fn ten_sided(roll_count: i64, modifier: i64) -> Result<DiceResult, InvalidArgument> {
    Die::D10.roll(roll_count, modifier)
}

/// Roll d12s
pub fn twelve_sided(roll_count: i64, modifier: i64) -> Result<DiceResult, InvalidArgument> {
    Die::D12.roll(roll_count, modifier)
}

/// Roll d20s
pub fn twenty_sided(roll_count: i64, modifier: i64) -> Result<DiceResult, InvalidArgument> {
    Die::D20.roll(roll_count, modifier)
}

/// Roll d100s
pub fn hundred_sided(roll_count: i64, modifier: i64) -> Result<DiceResult, InvalidArgument> {
    Die::D100.roll(roll_count, modifier)
}

/// Fix the number of dice first, then pick the die
///
/// The count is checked here rather than when the die is rolled.
pub fn for_rolls(roll_count: i64) -> Result<RollCount, InvalidArgument> {
    check_roll_count(roll_count).map(|count| RollCount { count })
}

/// A validated number of dice waiting for a die type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollCount {
    count: u32,
}

impl RollCount {
    /// Number of dice that will be rolled
    pub fn count(self) -> u32 {
        self.count
    }

    /// Roll this many of `die` using the thread-local generator
    pub fn roll(self, die: Die, modifier: i64) -> Result<DiceResult, InvalidArgument> {
        die.roll(i64::from(self.count), modifier)
    }

    /// Roll this many of `die` using the given sampler
    pub fn roll_with<S: Sampler>(
        self,
        die: Die,
        sampler: S,
        modifier: i64,
    ) -> Result<DiceResult<S>, InvalidArgument> {
        die.roll_with(sampler, i64::from(self.count), modifier)
    }

    pub fn four_sided(self, modifier: i64) -> Result<DiceResult, InvalidArgument> {
        self.roll(Die::D4, modifier)
    }

    pub fn six_sided(self, modifier: i64) -> Result<DiceResult, InvalidArgument> {
        self.roll(Die::D6, modifier)
    }

    pub fn eight_sided(self, modifier: i64) -> Result<DiceResult, InvalidArgument> {
        self.roll(Die::D8, modifier)
    }

    pub fn ten_sided(self, modifier: i64) -> Result<DiceResult, InvalidArgument> {
        self.roll(Die::D10, modifier)
    }

    pub fn twelve_sided(self, modifier: i64) -> Result<DiceResult, InvalidArgument> {
        self.roll(Die::D12, modifier)
    }

    pub fn twenty_sided(self, modifier: i64) -> Result<DiceResult, InvalidArgument> {
        self.roll(Die::D20, modifier)
    }

    pub fn hundred_sided(self, modifier: i64) -> Result<DiceResult, InvalidArgument> {
        self.roll(Die::D100, modifier)
    }
}
