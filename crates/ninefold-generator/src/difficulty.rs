//! Difficulty presets and generation settings.

use std::{fmt, str::FromStr};

/// How many cells a generated puzzle leaves for the player to fill.
///
/// The named presets map to fixed empty-cell targets. [`Difficulty::Custom`]
/// requests an exact count instead. Either way the target is an upper bound:
/// carving stops early when no further cell can be removed without losing
/// uniqueness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    /// 30 empty cells.
    Low,
    /// 45 empty cells.
    #[default]
    Medium,
    /// 55 empty cells.
    High,
    /// An exact number of empty cells.
    Custom(u8),
}

impl Difficulty {
    /// Number of cells the carver tries to empty.
    ///
    /// Custom values are clamped to the 81 cells of the board.
    #[must_use]
    pub fn target_empties(self) -> u8 {
        match self {
            Self::Low => 30,
            Self::Medium => 45,
            Self::High => 55,
            Self::Custom(empties) => empties.min(81),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::Medium => f.write_str("medium"),
            Self::High => f.write_str("high"),
            Self::Custom(empties) => write!(f, "{empties}"),
        }
    }
}

/// Error from parsing a [`Difficulty`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {input:?}, expected low, medium, high, or a number of empty cells")]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("low") {
            return Ok(Self::Low);
        }
        if s.eq_ignore_ascii_case("medium") {
            return Ok(Self::Medium);
        }
        if s.eq_ignore_ascii_case("high") {
            return Ok(Self::High);
        }
        if let Ok(empties) = s.parse::<u8>()
            && empties <= 81
        {
            return Ok(Self::Custom(empties));
        }
        Err(ParseDifficultyError {
            input: s.to_owned(),
        })
    }
}

/// Settings for one puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// How many cells to carve out of the full solution.
    pub difficulty: Difficulty,
    /// Keep every removal that leaves exactly one solution and reject the
    /// rest.
    pub ensure_unique: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            ensure_unique: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_targets() {
        assert_eq!(Difficulty::Low.target_empties(), 30);
        assert_eq!(Difficulty::Medium.target_empties(), 45);
        assert_eq!(Difficulty::High.target_empties(), 55);
        assert_eq!(Difficulty::Custom(12).target_empties(), 12);
    }

    #[test]
    fn test_custom_target_is_clamped_to_board_size() {
        assert_eq!(Difficulty::Custom(200).target_empties(), 81);
    }

    #[test]
    fn test_parse() {
        assert_eq!("low".parse(), Ok(Difficulty::Low));
        assert_eq!("MEDIUM".parse(), Ok(Difficulty::Medium));
        assert_eq!("High".parse(), Ok(Difficulty::High));
        assert_eq!("40".parse(), Ok(Difficulty::Custom(40)));
        assert!("82".parse::<Difficulty>().is_err());
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_display_parse_round_trip() {
        let all = [
            Difficulty::Low,
            Difficulty::Medium,
            Difficulty::High,
            Difficulty::Custom(33),
        ];
        for difficulty in all {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
    }

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert!(config.ensure_unique);
    }
}
