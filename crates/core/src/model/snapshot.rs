use crate::model::{Deadline, FlashCard};

/// Owned, read-only copy of a whole collection.
///
/// This is the shape exchanged with persistence adapters and accepted by
/// bulk resets. It does not enforce uniqueness itself; the store validates it
/// on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSnapshot {
    pub cards: Vec<FlashCard>,
    pub deadlines: Vec<Deadline>,
}

impl CollectionSnapshot {
    #[must_use]
    pub fn new(cards: Vec<FlashCard>, deadlines: Vec<Deadline>) -> Self {
        Self { cards, deadlines }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.deadlines.is_empty()
    }
}
