//! Ready-made predicates for the search and browse commands.

use flashdeck_core::model::{Category, Deadline, FlashCard, Rating};

fn contains_word_ignore_case(text: &str, word: &str) -> bool {
    text.split_whitespace()
        .any(|candidate| candidate.eq_ignore_ascii_case(word))
}

fn normalize_keywords(keywords: &[&str]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Cards whose question contains any of the keywords as a whole word.
pub fn question_contains_any(keywords: &[&str]) -> impl Fn(&FlashCard) -> bool + 'static {
    let keywords = normalize_keywords(keywords);
    move |card| {
        keywords
            .iter()
            .any(|k| contains_word_ignore_case(card.question().as_str(), k))
    }
}

/// Cards whose answer contains any of the keywords as a whole word.
pub fn answer_contains_any(keywords: &[&str]) -> impl Fn(&FlashCard) -> bool + 'static {
    let keywords = normalize_keywords(keywords);
    move |card| {
        keywords
            .iter()
            .any(|k| contains_word_ignore_case(card.answer().as_str(), k))
    }
}

pub fn rating_is(rating: Rating) -> impl Fn(&FlashCard) -> bool + 'static {
    move |card| card.rating() == rating
}

pub fn in_category(category: Category) -> impl Fn(&FlashCard) -> bool + 'static {
    move |card| card.has_category(&category)
}

/// Deadlines whose task contains any of the keywords as a whole word.
pub fn task_contains_any(keywords: &[&str]) -> impl Fn(&Deadline) -> bool + 'static {
    let keywords = normalize_keywords(keywords);
    move |deadline| {
        keywords
            .iter()
            .any(|k| contains_word_ignore_case(deadline.task().as_str(), k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card, card_in, deadline};

    #[test]
    fn keyword_match_is_whole_word_and_case_insensitive() {
        let c = card("What is a POINTER in C?", "An address", Rating::Easy);
        assert!(question_contains_any(&["pointer"])(&c));
        assert!(!question_contains_any(&["point"])(&c));
        assert!(answer_contains_any(&["missing", "ADDRESS"])(&c));
        assert!(!answer_contains_any(&["  "])(&c));
    }

    #[test]
    fn rating_and_category_predicates() {
        let c = card_in("Q", "A", Rating::Hard, &["CS2105"]);
        assert!(rating_is(Rating::Hard)(&c));
        assert!(!rating_is(Rating::Easy)(&c));
        assert!(in_category(Category::new("CS2105").unwrap())(&c));
    }

    #[test]
    fn task_keywords() {
        let d = deadline("CS2103 Final Project Submission", "10/11/2019");
        assert!(task_contains_any(&["project"])(&d));
        assert!(!task_contains_any(&["guide"])(&d));
    }
}
