use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty recorded on a single question.
///
/// Bank records that omit a difficulty are treated as medium.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Upper-case badge shown next to a question.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

/// Difficulty selected for a whole game session.
///
/// `Mixed` draws from the full bank; every other mode filters the bank to the
/// matching [`Difficulty`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Easy,
    Medium,
    Hard,
    #[default]
    Mixed,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Mixed, Mode::Easy, Mode::Medium, Mode::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Medium => "medium",
            Mode::Hard => "hard",
            Mode::Mixed => "mixed",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Easy => "EASY",
            Mode::Medium => "MEDIUM",
            Mode::Hard => "HARD",
            Mode::Mixed => "MIXED",
        }
    }

    /// The question difficulty this mode filters on, or `None` for mixed.
    #[must_use]
    pub const fn difficulty(self) -> Option<Difficulty> {
        match self {
            Mode::Easy => Some(Difficulty::Easy),
            Mode::Medium => Some(Difficulty::Medium),
            Mode::Hard => Some(Difficulty::Hard),
            Mode::Mixed => None,
        }
    }

    #[must_use]
    pub const fn is_mixed(self) -> bool {
        matches!(self, Mode::Mixed)
    }
}

impl From<Difficulty> for Mode {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Easy => Mode::Easy,
            Difficulty::Medium => Mode::Medium,
            Difficulty::Hard => Mode::Hard,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {0:?}")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Mode::Easy),
            "medium" => Ok(Mode::Medium),
            "hard" => Ok(Mode::Hard),
            "mixed" => Ok(Mode::Mixed),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_str(s)?
            .difficulty()
            .ok_or_else(|| ParseModeError(s.to_owned()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!(" Hard ".parse::<Mode>().unwrap(), Mode::Hard);
        assert_eq!("MIXED".parse::<Mode>().unwrap(), Mode::Mixed);
        assert!("extreme".parse::<Mode>().is_err());
    }

    #[test]
    fn mixed_is_not_a_question_difficulty() {
        assert!("mixed".parse::<Difficulty>().is_err());
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(Mode::Mixed.difficulty(), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Mode::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }
}
