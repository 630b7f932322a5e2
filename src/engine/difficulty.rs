//! Difficulty scaling via search-depth reduction

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Computer strength presets.
///
/// Each level maps to an integer divisor applied to the remaining
/// empty-cell count when deriving the search depth; a smaller divisor
/// means a deeper search and stronger play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    Normal,
    #[default]
    Hard,
}

impl Difficulty {
    /// Divisor applied to the remaining empty-cell count
    pub fn divisor(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Normal => 2,
            Difficulty::Hard => 1,
        }
    }

    /// Effective search depth for a board with `empty_count` free cells.
    ///
    /// The empty count is divided by the divisor and floored. A divisor
    /// larger than the remaining empty count applies no reduction at all,
    /// so the result is never 0 while a move remains.
    pub fn effective_depth(self, empty_count: usize) -> usize {
        let divisor = self.divisor();
        if divisor > empty_count {
            empty_count
        } else {
            empty_count / divisor
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, normal, hard".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors() {
        assert_eq!(Difficulty::Hard.divisor(), 1);
        assert_eq!(Difficulty::Normal.divisor(), 2);
        assert_eq!(Difficulty::Easy.divisor(), 4);
    }

    #[test]
    fn test_hard_searches_full_depth() {
        for empty in 1..=9 {
            assert_eq!(Difficulty::Hard.effective_depth(empty), empty);
        }
    }

    #[test]
    fn test_depth_division_floors() {
        assert_eq!(Difficulty::Normal.effective_depth(7), 3);
        assert_eq!(Difficulty::Normal.effective_depth(6), 3);
        assert_eq!(Difficulty::Easy.effective_depth(9), 2);
    }

    #[test]
    fn test_no_reduction_when_divisor_exceeds_empty_count() {
        assert_eq!(Difficulty::Easy.effective_depth(3), 3);
        assert_eq!(Difficulty::Easy.effective_depth(1), 1);
        assert_eq!(Difficulty::Normal.effective_depth(1), 1);
    }

    #[test]
    fn test_depth_is_positive_while_moves_remain() {
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            for empty in 1..=9 {
                assert!(
                    difficulty.effective_depth(empty) >= 1,
                    "{difficulty} at {empty} empties"
                );
            }
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let parsed: Difficulty = difficulty.to_string().parse().unwrap();
            assert_eq!(parsed, difficulty);
        }
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_parse_rejects_unknown_level() {
        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert!(err.to_string().contains("easy, normal, hard"), "got {err}");
    }
}
