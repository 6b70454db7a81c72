use std::collections::BTreeSet;

use flashdeck_core::model::{
    Answer, Category, CollectionSnapshot, Deadline, DueDate, FlashCard, Question, Rating, Task,
};

const CARDS: [(&str, &str, Rating, &[&str]); 5] = [
    (
        "What is pointer in C ?",
        "A pointer variable stores the address of a memory location",
        Rating::Easy,
        &["CS2100", "C", "POINTER"],
    ),
    (
        "How to declare a pointer in C ?",
        "& + variable name",
        Rating::Easy,
        &["CS2100"],
    ),
    (
        "What is internet",
        "The Internet is a network of connected computing devices",
        Rating::Easy,
        &["CS2105"],
    ),
    (
        "How is data transmitted through net?",
        "Circuit switching / Packet switching",
        Rating::Good,
        &[],
    ),
    (
        "What is link transmission rate?",
        "It is aka link capacity or link bandwidth",
        Rating::Easy,
        &[],
    ),
];

const DEADLINES: [(&str, &str); 2] = [
    ("CS2103 Final Project Submission", "10/11/2019"),
    ("CS2101 User Guide Submission", "12/11/2019"),
];

/// Starter collection used when no saved data exists.
///
/// Entries that fail validation are skipped, so the result is always usable.
#[must_use]
pub fn sample_collection() -> CollectionSnapshot {
    let cards = CARDS
        .iter()
        .filter_map(|(question, answer, rating, categories)| {
            Some(FlashCard::new(
                Question::new(*question).ok()?,
                Answer::new(*answer).ok()?,
                *rating,
                Category::set_from(categories).unwrap_or_else(|_| BTreeSet::new()),
            ))
        })
        .collect();

    let deadlines = DEADLINES
        .iter()
        .filter_map(|(task, due)| {
            Some(Deadline::new(
                Task::new(*task).ok()?,
                DueDate::parse(due).ok()?,
            ))
        })
        .collect();

    CollectionSnapshot::new(cards, deadlines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck_core::collection::are_unique;

    #[test]
    fn sample_data_is_complete_and_unique() {
        let sample = sample_collection();
        assert_eq!(sample.cards.len(), 5);
        assert_eq!(sample.deadlines.len(), 2);
        assert!(are_unique(&sample.cards));
        assert!(are_unique(&sample.deadlines));
        assert_eq!(sample.cards[0].categories().len(), 3);
        assert_eq!(sample.cards[3].rating(), Rating::Good);
    }
}
