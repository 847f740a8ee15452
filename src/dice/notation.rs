//! Dice notation
//!
//! Parses and formats notation like "2d6+3", "1d20", "4d6-2", "d8"

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{check_roll_count, check_side_count, NotationError};
use super::result::DiceResult;
use super::sampler::Sampler;

/// A parsed dice roll specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceNotation {
    /// Number of dice to roll
    pub count: u32,
    /// Number of sides per die
    pub sides: u32,
    /// Modifier to add/subtract
    pub modifier: i64,
}

impl DiceNotation {
    /// Create a notation, checking count and sides
    pub fn new(count: i64, sides: i64, modifier: i64) -> Result<Self, NotationError> {
        Ok(Self {
            count: check_roll_count(count)?,
            sides: check_side_count(sides)?,
            modifier,
        })
    }

    /// Parse a notation string
    pub fn parse(notation: &str) -> Result<Self, NotationError> {
        let notation = notation.trim().to_lowercase();
        if notation.is_empty() {
            return Err(NotationError::Empty);
        }

        let d_pos = notation
            .find('d')
            .ok_or_else(|| NotationError::MissingSeparator(notation.clone()))?;

        // "d6" means "1d6"
        let count_str = &notation[..d_pos];
        let count: i64 = if count_str.is_empty() {
            1
        } else {
            parse_digits(count_str).ok_or_else(|| NotationError::BadCount(count_str.to_string()))?
        };

        let rest = &notation[d_pos + 1..];
        let (sides_str, modifier) = match rest.find(['+', '-']) {
            Some(0) => return Err(NotationError::BadSides(rest.to_string())),
            Some(pos) => {
                let (sides, mod_str) = rest.split_at(pos);
                let magnitude = parse_digits(&mod_str[1..])
                    .ok_or_else(|| NotationError::BadModifier(mod_str.to_string()))?;
                let modifier = if mod_str.starts_with('-') {
                    -magnitude
                } else {
                    magnitude
                };
                (sides, modifier)
            }
            None => (rest, 0),
        };

        let sides =
            parse_digits(sides_str).ok_or_else(|| NotationError::BadSides(sides_str.to_string()))?;

        Self::new(count, sides, modifier)
    }

    /// Lowest possible total, saturating at the `i64` bounds
    pub fn min(&self) -> i64 {
        i64::from(self.count).saturating_add(self.modifier)
    }

    /// Highest possible total, saturating at the `i64` bounds
    pub fn max(&self) -> i64 {
        i64::from(self.count)
            .saturating_mul(i64::from(self.sides))
            .saturating_add(self.modifier)
    }

    /// Roll using the thread-local generator
    pub fn roll(&self) -> DiceResult {
        self.roll_with(super::sampler::ThreadSampler::thread())
    }

    /// Roll using the given sampler
    pub fn roll_with<S: Sampler>(&self, sampler: S) -> DiceResult<S> {
        DiceResult::from_checked(sampler, self.count, self.sides, self.modifier)
    }
}

/// Parse an unsigned run of ASCII digits; signs and blanks are rejected
fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for DiceNotation {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier > 0 {
            write!(f, "{}d{}+{}", self.count, self.sides, self.modifier)
        } else if self.modifier < 0 {
            write!(f, "{}d{}{}", self.count, self.sides, self.modifier)
        } else {
            write!(f, "{}d{}", self.count, self.sides)
        }
    }
}
