use flashdeck_core::model::{CollectionSnapshot, Deadline, FlashCard, GradeTally, Rating};
use flashdeck_core::{CollectionError, UniqueList, collection::are_unique};

/// System of record for cards and deadlines.
///
/// Owns both unique lists plus the grade tally of the session in progress.
/// Categories are derived from the cards and never stored separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionStore {
    cards: UniqueList<FlashCard>,
    deadlines: UniqueList<Deadline>,
    tally: GradeTally,
}

impl CollectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateItem` if either list has identity duplicates.
    pub fn from_snapshot(snapshot: CollectionSnapshot) -> Result<Self, CollectionError> {
        let mut store = Self::new();
        store.reset_from(snapshot)?;
        Ok(store)
    }

    //
    // ─── CARDS ────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn has_card(&self, card: &FlashCard) -> bool {
        self.cards.contains(card)
    }

    pub fn add_card(&mut self, card: FlashCard) -> Result<(), CollectionError> {
        self.cards.add(card)
    }

    pub fn set_card(&mut self, target: &FlashCard, edited: FlashCard) -> Result<(), CollectionError> {
        self.cards.set(target, edited)
    }

    pub fn remove_card(&mut self, card: &FlashCard) -> Result<FlashCard, CollectionError> {
        self.cards.remove(card)
    }

    #[must_use]
    pub fn cards(&self) -> &[FlashCard] {
        self.cards.as_slice()
    }

    //
    // ─── DEADLINES ────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn has_deadline(&self, deadline: &Deadline) -> bool {
        self.deadlines.contains(deadline)
    }

    pub fn add_deadline(&mut self, deadline: Deadline) -> Result<(), CollectionError> {
        self.deadlines.add(deadline)
    }

    pub fn set_deadline(
        &mut self,
        target: &Deadline,
        edited: Deadline,
    ) -> Result<(), CollectionError> {
        self.deadlines.set(target, edited)
    }

    pub fn remove_deadline(&mut self, deadline: &Deadline) -> Result<Deadline, CollectionError> {
        self.deadlines.remove(deadline)
    }

    #[must_use]
    pub fn deadlines(&self) -> &[Deadline] {
        self.deadlines.as_slice()
    }

    //
    // ─── BULK ─────────────────────────────────────────────────────────────────
    //

    /// Replace both lists with the snapshot's contents.
    ///
    /// Both lists are validated before either is touched, so a failure leaves
    /// the store as it was.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateItem` if either list has identity duplicates.
    pub fn reset_from(&mut self, snapshot: CollectionSnapshot) -> Result<(), CollectionError> {
        if !are_unique(&snapshot.cards) || !are_unique(&snapshot.deadlines) {
            return Err(CollectionError::DuplicateItem);
        }
        self.cards.replace_all(snapshot.cards)?;
        self.deadlines.replace_all(snapshot.deadlines)?;
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> CollectionSnapshot {
        CollectionSnapshot::new(self.cards().to_vec(), self.deadlines().to_vec())
    }

    //
    // ─── GRADING ──────────────────────────────────────────────────────────────
    //

    pub fn record_outcome(&mut self, rating: Rating) {
        self.tally.record(rating);
    }

    #[must_use]
    pub fn tally(&self) -> GradeTally {
        self.tally
    }

    pub fn clear_tally(&mut self) {
        self.tally.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card, deadline};

    #[test]
    fn second_add_of_same_identity_fails_and_leaves_store_unchanged() {
        let mut store = CollectionStore::new();
        store.add_card(card("Q1", "A1", Rating::Easy)).unwrap();
        let before = store.clone();

        let err = store.add_card(card("Q1", "A1", Rating::Hard)).unwrap_err();
        assert_eq!(err, CollectionError::DuplicateItem);
        assert_eq!(store, before);
    }

    #[test]
    fn set_card_rejects_collision_with_another_card() {
        let mut store = CollectionStore::new();
        let q1 = card("Q1", "A1", Rating::Easy);
        let q2 = card("Q2", "A2", Rating::Easy);
        store.add_card(q1.clone()).unwrap();
        store.add_card(q2.clone()).unwrap();

        assert_eq!(
            store.set_card(&q1, card("Q2", "A2", Rating::Good)),
            Err(CollectionError::DuplicateItem)
        );
        store.set_card(&q1, q1.with_rating(Rating::Hard)).unwrap();
        assert_eq!(store.cards()[0].rating(), Rating::Hard);
        assert_eq!(store.cards()[1], q2);
    }

    #[test]
    fn deadline_lifecycle() {
        let mut store = CollectionStore::new();
        let d = deadline("Report", "12/11/2019");
        store.add_deadline(d.clone()).unwrap();
        assert!(store.has_deadline(&d));
        assert_eq!(store.add_deadline(d.clone()), Err(CollectionError::DuplicateItem));

        let moved = deadline("Report", "13/11/2019");
        store.set_deadline(&d, moved.clone()).unwrap();
        assert!(!store.has_deadline(&d));
        assert_eq!(store.remove_deadline(&moved), Ok(moved));
        assert_eq!(store.remove_deadline(&d), Err(CollectionError::ItemNotFound));
    }

    #[test]
    fn reset_from_is_atomic_across_both_lists() {
        let mut store = CollectionStore::new();
        store.add_card(card("Q1", "A1", Rating::Easy)).unwrap();
        let before = store.clone();

        let bad = CollectionSnapshot::new(
            vec![card("Q9", "A9", Rating::Easy)],
            vec![deadline("X", "01/01/2020"), deadline("X", "01/01/2020")],
        );
        assert_eq!(store.reset_from(bad), Err(CollectionError::DuplicateItem));
        assert_eq!(store, before);

        let good = CollectionSnapshot::new(
            vec![card("Q9", "A9", Rating::Easy)],
            vec![deadline("X", "01/01/2020")],
        );
        store.reset_from(good.clone()).unwrap();
        assert_eq!(store.snapshot(), good);
    }

    #[test]
    fn tally_accumulates_until_cleared() {
        let mut store = CollectionStore::new();
        store.record_outcome(Rating::Good);
        store.record_outcome(Rating::Hard);
        assert_eq!(store.tally(), GradeTally::new(0, 1, 1));
        store.clear_tally();
        assert_eq!(store.tally().total(), 0);
    }
}
