//! Dice errors

use thiserror::Error;

/// Most dice a single roll may draw
pub const MAX_ROLL_COUNT: u32 = 1_000_000;

/// A rejected argument to a roll or a chained operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("roll count must be a positive integer (got {0})")]
    RollCount(i64),

    #[error("roll count must be at most {max} (got {0})", max = MAX_ROLL_COUNT)]
    TooManyRolls(i64),

    #[error("side count must be a positive integer no larger than {max} (got {0})", max = u32::MAX)]
    SideCount(i64),

    #[error("minimum value must be an integer greater than or equal to 1 (got {0})")]
    Minimum(i64),
}

/// Errors from parsing dice notation like "2d6+3"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty dice notation")]
    Empty,

    #[error("missing 'd' in dice notation '{0}'")]
    MissingSeparator(String),

    #[error("invalid dice count: '{0}'")]
    BadCount(String),

    #[error("invalid die sides: '{0}'")]
    BadSides(String),

    #[error("invalid modifier: '{0}'")]
    BadModifier(String),

    #[error(transparent)]
    Invalid(#[from] InvalidArgument),
}

/// Validate a roll count and narrow it to the stored width
pub(crate) fn check_roll_count(count: i64) -> Result<u32, InvalidArgument> {
    if count < 1 {
        return Err(InvalidArgument::RollCount(count));
    }
    match u32::try_from(count) {
        Ok(n) if n <= MAX_ROLL_COUNT => Ok(n),
        _ => Err(InvalidArgument::TooManyRolls(count)),
    }
}

/// Validate a side count and narrow it to the stored width
pub(crate) fn check_side_count(sides: i64) -> Result<u32, InvalidArgument> {
    match u32::try_from(sides) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InvalidArgument::SideCount(sides)),
    }
}
