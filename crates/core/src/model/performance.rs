use thiserror::Error;

use crate::model::Rating;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PerformanceError {
    #[error("no graded cards to score")]
    NoGradedCards,

    #[error("score {0} is outside 0..=100")]
    ScoreOutOfRange(u32),
}

/// Per-session counts of graded outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeTally {
    easy: u32,
    good: u32,
    hard: u32,
}

impl GradeTally {
    #[must_use]
    pub fn new(easy: u32, good: u32, hard: u32) -> Self {
        Self { easy, good, hard }
    }

    pub fn record(&mut self, rating: Rating) {
        match rating {
            Rating::Easy => self.easy = self.easy.saturating_add(1),
            Rating::Good => self.good = self.good.saturating_add(1),
            Rating::Hard => self.hard = self.hard.saturating_add(1),
        }
    }

    #[must_use]
    pub fn easy(&self) -> u32 {
        self.easy
    }

    #[must_use]
    pub fn good(&self) -> u32 {
        self.good
    }

    #[must_use]
    pub fn hard(&self) -> u32 {
        self.hard
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.easy) + u64::from(self.good) + u64::from(self.hard)
    }

    /// Percentage of passing grades, rounded down.
    ///
    /// # Errors
    ///
    /// Returns `PerformanceError::NoGradedCards` if nothing was graded.
    pub fn score(&self) -> Result<u32, PerformanceError> {
        let total = self.total();
        if total == 0 {
            return Err(PerformanceError::NoGradedCards);
        }
        let passed = u64::from(self.easy) + u64::from(self.good);
        // passed <= total, so the quotient is at most 100.
        Ok(u32::try_from(passed * 100 / total).unwrap_or(100))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Append-only history of session scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceTracker {
    history: Vec<u32>,
}

impl PerformanceTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a tracker from persisted scores.
    ///
    /// # Errors
    ///
    /// Returns `PerformanceError::ScoreOutOfRange` if any score exceeds 100.
    pub fn from_history(history: Vec<u32>) -> Result<Self, PerformanceError> {
        if let Some(bad) = history.iter().find(|score| **score > 100) {
            return Err(PerformanceError::ScoreOutOfRange(*bad));
        }
        Ok(Self { history })
    }

    /// Score a session from raw counts and append it.
    ///
    /// # Errors
    ///
    /// Returns `PerformanceError::NoGradedCards` if all counts are zero; history is unchanged.
    pub fn commit(&mut self, easy: u32, good: u32, hard: u32) -> Result<u32, PerformanceError> {
        self.commit_tally(&GradeTally::new(easy, good, hard))
    }

    /// Score a session from a tally and append it.
    ///
    /// # Errors
    ///
    /// Returns `PerformanceError::NoGradedCards` if the tally is empty; history is unchanged.
    pub fn commit_tally(&mut self, tally: &GradeTally) -> Result<u32, PerformanceError> {
        let score = tally.score()?;
        self.history.push(score);
        Ok(score)
    }

    #[must_use]
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    #[must_use]
    pub fn latest(&self) -> Option<u32> {
        self.history.last().copied()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_appends_floored_percentage() {
        let mut tracker = PerformanceTracker::new();
        assert_eq!(tracker.commit(2, 3, 5), Ok(50));
        assert_eq!(tracker.commit(1, 0, 2), Ok(33));
        assert_eq!(tracker.history(), &[50, 33]);
        assert_eq!(tracker.latest(), Some(33));
    }

    #[test]
    fn empty_session_is_not_scored() {
        let mut tracker = PerformanceTracker::new();
        assert_eq!(tracker.commit(0, 0, 0), Err(PerformanceError::NoGradedCards));
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn tally_counts_each_rating() {
        let mut tally = GradeTally::default();
        for rating in [Rating::Easy, Rating::Good, Rating::Good, Rating::Hard] {
            tally.record(rating);
        }
        assert_eq!((tally.easy(), tally.good(), tally.hard()), (1, 2, 1));
        assert_eq!(tally.score(), Ok(75));
        tally.clear();
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn reset_clears_history() {
        let mut tracker = PerformanceTracker::from_history(vec![100, 20]).unwrap();
        tracker.reset();
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn rehydration_rejects_impossible_scores() {
        assert_eq!(
            PerformanceTracker::from_history(vec![90, 101]),
            Err(PerformanceError::ScoreOutOfRange(101))
        );
    }
}
