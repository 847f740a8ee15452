//! Command-line configuration
//!
//! Layered with figment: built-in defaults, then an optional TOML file, then
//! `DICEROLL_*` environment variables.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "diceroll.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "DICEROLL_";

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),

    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("ability_sides must be at least 1 (got {0})")]
    AbilitySides(i64),
}

/// Settings for the `diceroll` binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Seed for reproducible rolls; thread RNG when unset
    pub seed: Option<u64>,
    /// Output format
    pub output: OutputFormat,
    /// Die used for ability scores
    pub ability_sides: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "diceroll=warn".to_string(),
            seed: None,
            output: OutputFormat::Text,
            ability_sides: 6,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, `diceroll.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) if !p.exists() => return Err(ConfigError::Missing(p.to_path_buf())),
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Toml::file(file))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Extract and validate from a prepared figment
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ability_sides < 1 {
            return Err(ConfigError::AbilitySides(self.ability_sides));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_figment(Figment::from(Serialized::defaults(Config::default())))
            .unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ability_sides, 6);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string("seed = 7\noutput = \"json\"\n"));
        let config = Config::from_figment(figment).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "diceroll=warn");
    }

    #[test]
    fn test_rejects_bad_ability_sides() {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string("ability_sides = 0"));
        assert!(matches!(
            Config::from_figment(figment),
            Err(ConfigError::AbilitySides(0))
        ));
    }

    #[test]
    fn test_rejects_bad_output() {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string("output = \"yaml\""));
        assert!(matches!(
            Config::from_figment(figment),
            Err(ConfigError::Extract(_))
        ));
    }

    #[test]
    fn test_output_names_match_cli() {
        for format in OutputFormat::value_variants() {
            let name = format
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap();
            let parsed: OutputFormat =
                Config::from_figment(Figment::from(Toml::string(&format!("output = \"{}\"", name))))
                    .unwrap()
                    .output;
            assert_eq!(parsed, *format);
            assert_eq!(OutputFormat::from_str(&name, false), Ok(*format));
        }
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/diceroll.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }
}
