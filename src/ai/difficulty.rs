use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Named strength levels offered to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" | "difficult" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Search parameters for one difficulty level.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchConfig {
    /// Plies searched, including the root move.
    pub depth: usize,
    /// Probability of playing a uniformly random legal move instead of the
    /// searched one.
    pub random_chance: f64,
}

impl SearchConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => SearchConfig {
                depth: 2,
                random_chance: 0.3,
            },
            Difficulty::Medium => SearchConfig {
                depth: 4,
                random_chance: 0.0,
            },
            Difficulty::Hard => SearchConfig {
                depth: 6,
                random_chance: 0.0,
            },
        }
    }

    /// Same depth with randomisation switched off.
    pub fn deterministic(&self) -> Self {
        SearchConfig {
            depth: self.depth,
            random_chance: 0.0,
        }
    }
}
