use std::collections::BTreeSet;

use crate::collection::Identity;
use crate::model::{Answer, Category, Question, Rating};

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

/// A single question/answer card.
///
/// Two cards are the *same flashcard* when question and answer match, even if
/// rating or categories differ. `PartialEq` stays structural; use
/// [`FlashCard::is_same_card`] (or the [`Identity`] impl) for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashCard {
    question: Question,
    answer: Answer,
    rating: Rating,
    categories: BTreeSet<Category>,
}

impl FlashCard {
    #[must_use]
    pub fn new(
        question: Question,
        answer: Answer,
        rating: Rating,
        categories: BTreeSet<Category>,
    ) -> Self {
        Self {
            question,
            answer,
            rating,
            categories,
        }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        self.rating
    }

    #[must_use]
    pub fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    #[must_use]
    pub fn has_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    /// Returns true if both cards have the same question and answer.
    #[must_use]
    pub fn is_same_card(&self, other: &FlashCard) -> bool {
        self.question == other.question && self.answer == other.answer
    }

    /// Copy of this card with a different rating.
    #[must_use]
    pub fn with_rating(&self, rating: Rating) -> Self {
        Self {
            rating,
            ..self.clone()
        }
    }

    /// Copy of this card with a different category set.
    #[must_use]
    pub fn with_categories(&self, categories: BTreeSet<Category>) -> Self {
        Self {
            categories,
            ..self.clone()
        }
    }
}

impl Identity for FlashCard {
    fn same_identity(&self, other: &Self) -> bool {
        self.is_same_card(other)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn card(q: &str, a: &str, rating: Rating, categories: &[&str]) -> FlashCard {
        FlashCard::new(
            Question::new(q).unwrap(),
            Answer::new(a).unwrap(),
            rating,
            Category::set_from(categories).unwrap(),
        )
    }

    #[test]
    fn identity_ignores_rating_and_categories() {
        let a = card("What is C?", "A language", Rating::Easy, &["CS2100"]);
        let b = card("What is C?", "A language", Rating::Hard, &[]);
        assert!(a.is_same_card(&b));
        assert!(a.same_identity(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn identity_requires_both_question_and_answer() {
        let a = card("What is C?", "A language", Rating::Easy, &[]);
        let other_answer = card("What is C?", "A letter", Rating::Easy, &[]);
        let other_question = card("What is D?", "A language", Rating::Easy, &[]);
        assert!(!a.is_same_card(&other_answer));
        assert!(!a.is_same_card(&other_question));
    }

    #[test]
    fn with_rating_keeps_identity() {
        let a = card("Q", "A", Rating::Good, &["C"]);
        let edited = a.with_rating(Rating::Hard);
        assert_eq!(edited.rating(), Rating::Hard);
        assert!(edited.is_same_card(&a));
        assert!(edited.has_category(&Category::new("C").unwrap()));
    }
}
