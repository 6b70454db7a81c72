use std::fmt;

use flashdeck_core::model::{Answer, FlashCard, Question};
use rand::seq::SliceRandom;

use super::progress::SessionProgress;
use crate::error::SessionError;

/// Result of moving past the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The cursor moved to the next card.
    Next,
    /// The last card was passed; the caller should end the session.
    Complete,
}

/// Options applied when a session snapshot is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub shuffle: bool,
}

/// An in-progress quiz over a snapshot of cards.
///
/// The snapshot is owned, so edits to the live collection never reach a
/// running session. `cursor` is always a valid index into `cards`.
pub struct TestSession {
    cards: Vec<FlashCard>,
    cursor: usize,
    revealed: bool,
}

impl TestSession {
    /// Snapshot `cards` and point at the first one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no cards are provided.
    pub fn new(cards: Vec<FlashCard>) -> Result<Self, SessionError> {
        Self::with_options(cards, SessionOptions::default())
    }

    /// Like [`TestSession::new`], optionally shuffling the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no cards are provided.
    pub fn with_options(
        mut cards: Vec<FlashCard>,
        options: SessionOptions,
    ) -> Result<Self, SessionError> {
        if cards.is_empty() {
            return Err(SessionError::Empty);
        }
        if options.shuffle {
            cards.as_mut_slice().shuffle(&mut rand::rng());
        }
        Ok(Self {
            cards,
            cursor: 0,
            revealed: false,
        })
    }

    #[must_use]
    pub fn current_card(&self) -> &FlashCard {
        &self.cards[self.cursor]
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.current_card().question()
    }

    #[must_use]
    pub fn current_answer(&self) -> &Answer {
        self.current_card().answer()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn cards(&self) -> &[FlashCard] {
        &self.cards
    }

    /// Show the answer of the current card. Revealing twice is a no-op.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Move past the current card.
    ///
    /// On the last card this reports `Advance::Complete` and leaves the cursor
    /// where it is.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotRevealedYet` if the answer has not been shown;
    /// the cursor does not move.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if !self.revealed {
            return Err(SessionError::NotRevealedYet);
        }
        if self.cursor + 1 >= self.cards.len() {
            return Ok(Advance::Complete);
        }
        self.cursor += 1;
        self.revealed = false;
        Ok(Advance::Next)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.cards.len();
        let seen = self.cursor + usize::from(self.revealed);
        SessionProgress {
            total,
            position: self.cursor + 1,
            remaining: total - seen,
            revealed: self.revealed,
        }
    }
}

impl fmt::Debug for TestSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSession")
            .field("cards_len", &self.cards.len())
            .field("cursor", &self.cursor)
            .field("revealed", &self.revealed)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::card;
    use flashdeck_core::model::Rating;

    fn abc() -> Vec<FlashCard> {
        vec![
            card("A", "a", Rating::Easy),
            card("B", "b", Rating::Good),
            card("C", "c", Rating::Hard),
        ]
    }

    #[test]
    fn empty_session_returns_error() {
        let err = TestSession::new(Vec::new()).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn walks_cards_in_order() {
        let mut session = TestSession::new(abc()).unwrap();
        assert_eq!(session.current_question().as_str(), "A");
        assert!(!session.is_revealed());

        session.reveal();
        assert_eq!(session.current_answer().as_str(), "a");
        assert_eq!(session.advance(), Ok(Advance::Next));
        assert_eq!(session.current_question().as_str(), "B");
        assert!(!session.is_revealed());
    }

    #[test]
    fn advance_before_reveal_fails_and_keeps_cursor() {
        let mut session = TestSession::new(abc()).unwrap();
        assert_eq!(session.advance(), Err(SessionError::NotRevealedYet));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut session = TestSession::new(abc()).unwrap();
        session.reveal();
        session.reveal();
        assert!(session.is_revealed());
        assert_eq!(session.advance(), Ok(Advance::Next));
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn passing_last_card_signals_completion() {
        let mut session = TestSession::new(abc()).unwrap();
        for _ in 0..2 {
            session.reveal();
            assert_eq!(session.advance(), Ok(Advance::Next));
        }
        session.reveal();
        assert_eq!(session.advance(), Ok(Advance::Complete));
        assert_eq!(session.cursor(), 2);
        assert_eq!(session.current_question().as_str(), "C");
        assert_eq!(session.progress().remaining, 0);
    }

    #[test]
    fn progress_tracks_position_and_remaining() {
        let mut session = TestSession::new(abc()).unwrap();
        assert_eq!(
            session.progress(),
            SessionProgress {
                total: 3,
                position: 1,
                remaining: 3,
                revealed: false,
            }
        );
        session.reveal();
        assert_eq!(session.progress().remaining, 2);
    }

    #[test]
    fn shuffled_snapshot_keeps_every_card() {
        let session = TestSession::with_options(abc(), SessionOptions { shuffle: true }).unwrap();
        let mut questions: Vec<_> = session
            .cards()
            .iter()
            .map(|c| c.question().as_str().to_string())
            .collect();
        questions.sort();
        assert_eq!(questions, ["A", "B", "C"]);
    }
}
