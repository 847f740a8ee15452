//! Rolled dice with chainable adjustments
//!
//! A [`DiceResult`] is rolled once and then adjusted in place:
//!
//! ```
//! use diceroll::dice::{DiceResult, MidpointSampler};
//!
//! let mut result = DiceResult::roll_with(MidpointSampler, 1, 6, -10).unwrap();
//! assert_eq!(result.floor_at_one().total(), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::ability::{self, AbilityScore};
use super::error::{check_roll_count, check_side_count, InvalidArgument};
use super::sampler::{Sampler, ThreadSampler};

/// The outcome of rolling `roll_count` dice of `sides` sides plus a modifier
#[derive(Debug, Clone)]
pub struct DiceResult<S = ThreadSampler> {
    sampler: S,
    roll_count: u32,
    sides: u32,
    modifier: i64,
    rolls: Vec<u32>,
    total: i64,
}

impl DiceResult {
    /// Roll using the thread-local generator
    pub fn roll(roll_count: i64, sides: i64, modifier: i64) -> Result<Self, InvalidArgument> {
        Self::roll_with(ThreadSampler::thread(), roll_count, sides, modifier)
    }

    /// Roll a single die with no modifier
    pub fn single(sides: i64) -> Result<Self, InvalidArgument> {
        Self::roll(1, sides, 0)
    }
}

impl<S: Sampler> DiceResult<S> {
    /// Roll using the given sampler
    ///
    /// Arguments are checked before anything is drawn, so a rejected roll
    /// leaves the sampler untouched.
    pub fn roll_with(
        sampler: S,
        roll_count: i64,
        sides: i64,
        modifier: i64,
    ) -> Result<Self, InvalidArgument> {
        let roll_count = check_roll_count(roll_count)?;
        let sides = check_side_count(sides)?;
        Ok(Self::from_checked(sampler, roll_count, sides, modifier))
    }

    /// Roll with arguments that have already been validated
    pub(crate) fn from_checked(mut sampler: S, roll_count: u32, sides: u32, modifier: i64) -> Self {
        let rolls: Vec<u32> = (0..roll_count).map(|_| sampler.sample(sides)).collect();
        let sum: i64 = rolls.iter().map(|&r| i64::from(r)).sum();
        let total = sum.saturating_add(modifier);

        debug!(roll_count, sides, modifier, total, "rolled dice");

        Self {
            sampler,
            roll_count,
            sides,
            modifier,
            rolls,
            total,
        }
    }

    /// The current total
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Individual die results in the order they were rolled
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    /// Number of dice rolled at construction
    pub fn roll_count(&self) -> u32 {
        self.roll_count
    }

    /// Faces per die
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// The modifier added at construction
    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Raise the total to at least 1
    pub fn floor_at_one(&mut self) -> &mut Self {
        self.total = self.total.max(1);
        trace!(total = self.total, "floored at one");
        self
    }

    /// Raise the total to at least `min`, which must be 1 or more
    pub fn floor_at(&mut self, min: i64) -> Result<&mut Self, InvalidArgument> {
        if min < 1 {
            return Err(InvalidArgument::Minimum(min));
        }
        self.total = self.total.max(min);
        trace!(min, total = self.total, "floored");
        Ok(self)
    }

    /// Keep the higher of the total and one fresh die
    pub fn advantage(&mut self) -> &mut Self {
        let extra = i64::from(self.sampler.sample(self.sides));
        self.total = self.total.max(extra);
        trace!(extra, total = self.total, "advantage");
        self
    }

    /// Keep the lower of the total and one fresh die
    pub fn disadvantage(&mut self) -> &mut Self {
        let extra = i64::from(self.sampler.sample(self.sides));
        self.total = self.total.min(extra);
        trace!(extra, total = self.total, "disadvantage");
        self
    }

    /// Total divided by the original roll count, to two decimal places
    ///
    /// The divisor is always the construction-time roll count, even after
    /// advantage or a floor has replaced the total. Halfway cases round away
    /// from zero, so 29 over 8 dice gives "3.63".
    pub fn average(&self) -> String {
        fixed_two(self.total as f64 / f64::from(self.roll_count))
    }

    /// Roll a fresh 4-drop-lowest ability score on this result's die
    ///
    /// Leaves the total alone.
    pub fn ability_score(&mut self) -> AbilityScore {
        ability::roll_score(&mut self.sampler, self.sides)
    }

    /// Snapshot of the current state for display or serialization
    pub fn report(&self) -> RollReport {
        RollReport {
            roll_count: self.roll_count,
            sides: self.sides,
            modifier: self.modifier,
            rolls: self.rolls.clone(),
            total: self.total,
            average: self.average(),
        }
    }

    /// Release the sampler
    pub fn into_sampler(self) -> S {
        self.sampler
    }
}

/// Format a finite value with two decimals
///
/// Rounds the exact binary value of `value` to the nearest hundredth and
/// takes the larger magnitude on a tie.
fn fixed_two(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = hundredths_half_up(value.abs());
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

/// `round(value * 100)` for a non-negative finite value, ties rounded up
fn hundredths_half_up(value: f64) -> u128 {
    let bits = value.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    // value == mantissa * 2^exp exactly
    let (mantissa, exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };

    let scaled = u128::from(mantissa) * 100;
    if exp >= 0 {
        return scaled << exp.min(64);
    }
    let shift = exp.unsigned_abs();
    if shift > 120 {
        return 0;
    }
    (scaled + (1u128 << (shift - 1))) >> shift
}

/// Serializable view of a [`DiceResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollReport {
    pub roll_count: u32,
    pub sides: u32,
    pub modifier: i64,
    pub rolls: Vec<u32>,
    pub total: i64,
    pub average: String,
}

impl std::fmt::Display for RollReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rolls: Vec<String> = self.rolls.iter().map(|r| r.to_string()).collect();
        write!(f, "{}d{}[{}]", self.roll_count, self.sides, rolls.join(", "))?;
        if self.modifier > 0 {
            write!(f, " + {}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, " - {}", self.modifier.unsigned_abs())?;
        }
        write!(f, " = {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::sampler::{MidpointSampler, SequenceSampler};

    #[test]
    fn test_single_roll_midpoint() {
        let result = DiceResult::roll_with(MidpointSampler, 1, 6, 0).unwrap();
        assert_eq!(result.rolls(), &[4]);
        assert_eq!(result.total(), 4);
    }

    #[test]
    fn test_modifier_applied() {
        let result = DiceResult::roll_with(MidpointSampler, 1, 6, 2).unwrap();
        assert_eq!(result.total(), 6);
        assert_eq!(result.modifier(), 2);
    }

    #[test]
    fn test_total_is_sum_plus_modifier() {
        let result = DiceResult::roll_with(SequenceSampler::new(vec![1, 5, 3]), 3, 6, -4).unwrap();
        assert_eq!(result.rolls(), &[1, 5, 3]);
        assert_eq!(result.total(), 5);
    }

    #[test]
    fn test_rolls_within_bounds() {
        for sides in [1, 2, 6, 20, 100] {
            let result = DiceResult::roll(25, sides, 0).unwrap();
            assert_eq!(result.rolls().len(), 25);
            assert!(result
                .rolls()
                .iter()
                .all(|&r| r >= 1 && i64::from(r) <= sides));
            let sum: i64 = result.rolls().iter().map(|&r| i64::from(r)).sum();
            assert_eq!(result.total(), sum);
        }
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            DiceResult::roll(0, 6, 0).unwrap_err(),
            InvalidArgument::RollCount(0)
        );
        assert_eq!(
            DiceResult::roll(-1, 6, 0).unwrap_err(),
            InvalidArgument::RollCount(-1)
        );
        assert_eq!(
            DiceResult::roll(1, 0, 0).unwrap_err(),
            InvalidArgument::SideCount(0)
        );
        assert_eq!(
            DiceResult::roll(1, -6, 0).unwrap_err(),
            InvalidArgument::SideCount(-6)
        );
    }

    #[test]
    fn test_rejected_roll_draws_nothing() {
        let mut sampler = SequenceSampler::new(vec![4]);
        assert!(DiceResult::roll_with(&mut sampler, 0, 6, 0).is_err());
        assert!(DiceResult::roll_with(&mut sampler, 2, -1, 0).is_err());
        assert_eq!(sampler.drawn(), 0);
    }

    #[test]
    fn test_floor_at_one() {
        let mut result = DiceResult::roll_with(MidpointSampler, 1, 6, -10).unwrap();
        assert_eq!(result.floor_at_one().total(), 1);
        assert_eq!(result.floor_at_one().total(), 1);

        let mut high = DiceResult::roll_with(MidpointSampler, 1, 6, 0).unwrap();
        assert_eq!(high.floor_at_one().total(), 4);
    }

    #[test]
    fn test_floor_at() {
        let mut result = DiceResult::roll_with(MidpointSampler, 1, 6, 0).unwrap();
        assert_eq!(result.floor_at(5).unwrap().total(), 5);
        assert_eq!(result.floor_at(5).unwrap().total(), 5);
        assert_eq!(result.floor_at(2).unwrap().total(), 5);
    }

    #[test]
    fn test_floor_at_rejects_low_minimum() {
        let mut result = DiceResult::roll_with(MidpointSampler, 1, 6, 0).unwrap();
        assert_eq!(result.floor_at(0).unwrap_err(), InvalidArgument::Minimum(0));
        assert_eq!(result.floor_at(-3).unwrap_err(), InvalidArgument::Minimum(-3));
        assert_eq!(result.total(), 4);
    }

    #[test]
    fn test_advantage_keeps_higher() {
        let mut result = DiceResult::roll_with(SequenceSampler::new(vec![2, 5]), 1, 6, 0).unwrap();
        assert_eq!(result.advantage().total(), 5);
        assert_eq!(result.rolls(), &[2]);

        let mut result = DiceResult::roll_with(SequenceSampler::new(vec![5, 2]), 1, 6, 0).unwrap();
        assert_eq!(result.advantage().total(), 5);
    }

    #[test]
    fn test_disadvantage_keeps_lower() {
        let mut result = DiceResult::roll_with(SequenceSampler::new(vec![5, 2]), 1, 6, 0).unwrap();
        assert_eq!(result.disadvantage().total(), 2);
        assert_eq!(result.rolls(), &[5]);

        let mut result = DiceResult::roll_with(MidpointSampler, 1, 6, 0).unwrap();
        assert_eq!(result.disadvantage().total(), 4);
    }

    #[test]
    fn test_advantage_draws_one_value() {
        let mut sampler = SequenceSampler::new(vec![3]);
        let mut result = DiceResult::roll_with(&mut sampler, 2, 6, 0).unwrap();
        result.advantage().disadvantage();
        drop(result);
        assert_eq!(sampler.drawn(), 4);
    }

    #[test]
    fn test_average_two_decimals() {
        let result = DiceResult::roll_with(MidpointSampler, 2, 6, 0).unwrap();
        assert_eq!(result.average(), "4.00");

        let result = DiceResult::roll_with(SequenceSampler::new(vec![1, 2, 2]), 3, 6, 0).unwrap();
        assert_eq!(result.average(), "1.67");
    }

    #[test]
    fn test_average_rounds_halves_away_from_zero() {
        assert_eq!(fixed_two(29.0 / 8.0), "3.63");
        assert_eq!(fixed_two(1.0 / 8.0), "0.13");
        assert_eq!(fixed_two(-1.0 / 8.0), "-0.13");
        assert_eq!(fixed_two(-29.0 / 8.0), "-3.63");
        assert_eq!(fixed_two(3.0 / 8.0), "0.38");
        assert_eq!(fixed_two(0.0), "0.00");
        assert_eq!(fixed_two(1.0 / 3.0), "0.33");
        assert_eq!(fixed_two(-2.0 / 3.0), "-0.67");
        assert_eq!(fixed_two(12.0), "12.00");
        assert_eq!(fixed_two(1234567.0 / 2.0), "617283.50");
    }

    #[test]
    fn test_average_of_eight_dice_tie() {
        let result = DiceResult::roll_with(SequenceSampler::new(vec![1]), 8, 6, -3).unwrap();
        assert_eq!(result.total(), 5);
        assert_eq!(result.average(), "0.63");

        let rolls = vec![6, 6, 6, 6, 2, 1, 1, 1];
        let result = DiceResult::roll_with(SequenceSampler::new(rolls), 8, 6, 0).unwrap();
        assert_eq!(result.total(), 29);
        assert_eq!(result.average(), "3.63");

        let result = DiceResult::roll_with(SequenceSampler::new(vec![1]), 8, 6, -9).unwrap();
        assert_eq!(result.average(), "-0.13");
    }

    #[test]
    fn test_rejects_too_many_rolls() {
        let mut sampler = SequenceSampler::new(vec![1]);
        let count = i64::from(crate::dice::MAX_ROLL_COUNT) + 1;
        assert_eq!(
            DiceResult::roll_with(&mut sampler, count, 6, 0).unwrap_err(),
            InvalidArgument::TooManyRolls(count)
        );
        assert_eq!(
            DiceResult::roll_with(&mut sampler, i64::from(u32::MAX), 6, 0).unwrap_err(),
            InvalidArgument::TooManyRolls(i64::from(u32::MAX))
        );
        assert_eq!(sampler.drawn(), 0);
    }

    #[test]
    fn test_average_uses_original_roll_count() {
        let mut result = DiceResult::roll_with(SequenceSampler::new(vec![1, 1, 6]), 2, 6, 0).unwrap();
        assert_eq!(result.total(), 2);
        result.advantage();
        assert_eq!(result.total(), 6);
        assert_eq!(result.average(), "3.00");
    }

    #[test]
    fn test_ability_score_leaves_total() {
        let mut result = DiceResult::roll_with(MidpointSampler, 1, 6, 1).unwrap();
        let score = result.ability_score();
        assert_eq!(score.rolls(), [4, 4, 4, 4]);
        assert_eq!(score.total(), 12);
        assert_eq!(result.total(), 5);
        assert_eq!(result.rolls(), &[4]);
    }

    #[test]
    fn test_chaining() {
        let mut result = DiceResult::roll_with(SequenceSampler::new(vec![1, 6]), 1, 6, -3).unwrap();
        let total = result.floor_at_one().advantage().total();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_report_display() {
        let result = DiceResult::roll_with(SequenceSampler::new(vec![2, 5]), 2, 6, -1).unwrap();
        let report = result.report();
        assert_eq!(report.to_string(), "2d6[2, 5] - 1 = 6");
        assert_eq!(report.average, "3.00");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rollCount"], 2);
        assert_eq!(json["total"], 6);
    }
}
