//! diceroll - dice rolling with chainable adjustments
//!
//! Roll N dice of S sides plus a modifier, then floor, take advantage or
//! disadvantage, average, or generate ability scores.

pub mod app;
pub mod config;
pub mod dice;

pub use config::{Config, OutputFormat};
pub use dice::{DiceResult, InvalidArgument};
