//! diceroll - roll dice from the command line

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use diceroll::app::{self, RollOptions};
use diceroll::dice::{DiceNotation, RngSampler, Sampler};
use diceroll::{Config, OutputFormat};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dice roller
#[derive(Parser, Debug)]
#[command(name = "diceroll", version, about = "Roll dice with chainable adjustments")]
struct Args {
    /// Config file (defaults to ./diceroll.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll dice given in notation like 2d6+3
    Roll {
        notation: String,

        /// Raise the total to at least 1
        #[arg(long)]
        floor_one: bool,

        /// Raise the total to at least MIN
        #[arg(long, value_name = "MIN")]
        floor: Option<i64>,

        /// Keep the higher of the total and one extra die
        #[arg(long, conflicts_with = "disadvantage")]
        advantage: bool,

        /// Keep the lower of the total and one extra die
        #[arg(long)]
        disadvantage: bool,

        /// Also print the per-die average
        #[arg(long)]
        average: bool,
    },

    /// Roll a set of six ability scores (4 dice, drop the lowest)
    Abilities {
        /// Die to roll (defaults to the configured ability_sides)
        #[arg(long)]
        sides: Option<i64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(format) = args.output {
        config.output = format;
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(?config, "loaded configuration");

    let out = match config.seed {
        Some(seed) => execute(&args.command, &config, RngSampler::seeded(seed))?,
        None => execute(&args.command, &config, RngSampler::thread())?,
    };
    println!("{}", out);

    Ok(())
}

fn execute<S: Sampler>(command: &Command, config: &Config, sampler: S) -> Result<String> {
    match command {
        Command::Roll {
            notation,
            floor_one,
            floor,
            advantage,
            disadvantage,
            average,
        } => {
            let notation: DiceNotation = notation
                .parse()
                .with_context(|| format!("cannot roll '{}'", notation))?;
            let options = RollOptions {
                floor_one: *floor_one,
                floor: *floor,
                advantage: *advantage,
                disadvantage: *disadvantage,
            };
            let report = app::roll(&notation, sampler, &options)?;
            Ok(app::render_roll(&report, *average, config.output)?)
        }
        Command::Abilities { sides } => {
            let sides = sides.unwrap_or(config.ability_sides);
            let scores = app::abilities(sampler, sides)?;
            Ok(app::render_abilities(&scores, config.output)?)
        }
    }
}
