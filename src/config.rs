use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::ai::{Difficulty, HeuristicWeights, SearchConfig};
use crate::error::ConfigError;

/// Deepest search a config may request. Beyond this a single move takes
/// minutes on a full-width board.
pub const MAX_DEPTH: usize = 12;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(deserialize_with = "easy_table")]
    pub easy: SearchConfig,
    #[serde(deserialize_with = "medium_table")]
    pub medium: SearchConfig,
    #[serde(deserialize_with = "hard_table")]
    pub hard: SearchConfig,
    pub heuristic: HeuristicWeights,
}

/// A difficulty table as written in TOML. Fields left out keep the level's
/// built-in value.
#[derive(Deserialize)]
struct SearchTable {
    depth: Option<usize>,
    random_chance: Option<f64>,
}

impl SearchTable {
    fn merge_onto(self, base: SearchConfig) -> SearchConfig {
        SearchConfig {
            depth: self.depth.unwrap_or(base.depth),
            random_chance: self.random_chance.unwrap_or(base.random_chance),
        }
    }
}

fn level_table<'de, D>(deserializer: D, difficulty: Difficulty) -> Result<SearchConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let table = SearchTable::deserialize(deserializer)?;
    Ok(table.merge_onto(SearchConfig::for_difficulty(difficulty)))
}

fn easy_table<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SearchConfig, D::Error> {
    level_table(deserializer, Difficulty::Easy)
}

fn medium_table<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SearchConfig, D::Error> {
    level_table(deserializer, Difficulty::Medium)
}

fn hard_table<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SearchConfig, D::Error> {
    level_table(deserializer, Difficulty::Hard)
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            easy: SearchConfig::for_difficulty(Difficulty::Easy),
            medium: SearchConfig::for_difficulty(Difficulty::Medium),
            hard: SearchConfig::for_difficulty(Difficulty::Hard),
            heuristic: HeuristicWeights::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Search parameters for a difficulty level.
    pub fn search_config(&self, difficulty: Difficulty) -> &SearchConfig {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in Difficulty::ALL {
            let search = self.search_config(difficulty);
            if search.depth == 0 || search.depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{difficulty}.depth must be in 1..={MAX_DEPTH}"
                )));
            }
            if !(0.0..=1.0).contains(&search.random_chance) {
                return Err(ConfigError::Validation(format!(
                    "{difficulty}.random_chance must be in [0, 1]"
                )));
            }
        }

        let w = &self.heuristic;
        if [w.three, w.two, w.opponent_three, w.opponent_two, w.center]
            .iter()
            .any(|&weight| weight < 0)
        {
            return Err(ConfigError::Validation(
                "heuristic weights must be >= 0".into(),
            ));
        }
        if w.three <= w.two {
            return Err(ConfigError::Validation(
                "heuristic.three must be > heuristic.two".into(),
            ));
        }
        if w.opponent_three <= w.opponent_two {
            return Err(ConfigError::Validation(
                "heuristic.opponent_three must be > heuristic.opponent_two".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
