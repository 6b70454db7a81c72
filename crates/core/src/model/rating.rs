use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RatingError {
    #[error("unknown rating `{0}` (expected easy, good or hard)")]
    Unknown(String),
}

//
// ─── RATING ───────────────────────────────────────────────────────────────────
//

/// Self-assessed difficulty of a flashcard.
///
/// - `Easy`: answered without effort
/// - `Good`: answered correctly with some effort
/// - `Hard`: could not answer, or answered with serious difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    Easy,
    Good,
    Hard,
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::Easy, Rating::Good, Rating::Hard];

    /// Lowercase label used by commands and persisted records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Easy => "easy",
            Rating::Good => "good",
            Rating::Hard => "hard",
        }
    }

    /// `Easy` and `Good` count towards the performance score.
    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Rating::Easy | Rating::Good)
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Rating::Easy),
            "good" => Ok(Rating::Good),
            "hard" => Ok(Rating::Hard),
            _ => Err(RatingError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
