//! Command handlers behind the `diceroll` binary

use serde::Serialize;
use serde_json::json;

use crate::config::OutputFormat;
use crate::dice::{
    generate_ability_scores, AbilityScore, DiceNotation, InvalidArgument, RollReport, Sampler,
    ABILITY_NAMES,
};

/// Adjustments to apply after rolling, in the order listed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollOptions {
    pub floor_one: bool,
    pub floor: Option<i64>,
    pub advantage: bool,
    pub disadvantage: bool,
}

/// Roll `notation` and apply the requested adjustments
pub fn roll<S: Sampler>(
    notation: &DiceNotation,
    sampler: S,
    options: &RollOptions,
) -> Result<RollReport, InvalidArgument> {
    let mut result = notation.roll_with(sampler);
    if options.floor_one {
        result.floor_at_one();
    }
    if let Some(min) = options.floor {
        result.floor_at(min)?;
    }
    if options.advantage {
        result.advantage();
    }
    if options.disadvantage {
        result.disadvantage();
    }
    Ok(result.report())
}

/// One line of an ability score table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedScore {
    pub ability: &'static str,
    #[serde(flatten)]
    pub score: AbilityScore,
}

/// Roll a score for each of the six abilities
pub fn abilities<S: Sampler>(
    mut sampler: S,
    sides: i64,
) -> Result<Vec<NamedScore>, InvalidArgument> {
    let scores = generate_ability_scores(&mut sampler, sides)?;
    Ok(ABILITY_NAMES
        .iter()
        .zip(scores)
        .map(|(&ability, score)| NamedScore { ability, score })
        .collect())
}

/// Render a roll report
pub fn render_roll(
    report: &RollReport,
    show_average: bool,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text if show_average => {
            Ok(format!("{}\naverage: {}", report, report.average))
        }
        OutputFormat::Text => Ok(report.to_string()),
    }
}

/// Render an ability score table
pub fn render_abilities(
    scores: &[NamedScore],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({ "abilities": scores })),
        OutputFormat::Text => Ok(scores
            .iter()
            .map(|s| format!("{}: {}", s.ability, s.score))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
