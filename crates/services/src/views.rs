use std::fmt;

use flashdeck_core::model::{Category, Deadline, FlashCard};

use crate::store::CollectionStore;

/// Boxed filter over one of the store's sequences.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

fn show_all<T: 'static>() -> Predicate<T> {
    Box::new(|_: &T| true)
}

fn show_none<T: 'static>() -> Predicate<T> {
    Box::new(|_: &T| false)
}

/// Live, independently filterable views over a `CollectionStore`.
///
/// Views hold only predicates. Every read re-evaluates the predicate over the
/// store's current contents, in insertion order, so results never go stale.
pub struct FilteredViews {
    cards: Predicate<FlashCard>,
    deadlines: Predicate<Deadline>,
    categories: Predicate<Category>,
    // Card filter to restore once browsing resumes; `Some` while suspended.
    parked_cards: Option<Predicate<FlashCard>>,
}

impl Default for FilteredViews {
    fn default() -> Self {
        Self {
            cards: show_all(),
            deadlines: show_all(),
            categories: show_all(),
            parked_cards: None,
        }
    }
}

impl FilteredViews {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    //
    // ─── CARDS ────────────────────────────────────────────────────────────────
    //

    /// Replace the card filter.
    ///
    /// While browsing is suspended the new filter is parked and takes effect
    /// when browsing resumes.
    pub fn set_card_filter(&mut self, predicate: impl Fn(&FlashCard) -> bool + 'static) {
        let predicate: Predicate<FlashCard> = Box::new(predicate);
        match self.parked_cards.as_mut() {
            Some(parked) => *parked = predicate,
            None => self.cards = predicate,
        }
    }

    pub fn show_all_cards(&mut self) {
        self.set_card_filter(|_| true);
    }

    /// Cards accepted by the current filter.
    #[must_use]
    pub fn card_view<'a>(&self, store: &'a CollectionStore) -> Vec<&'a FlashCard> {
        store.cards().iter().filter(|card| (self.cards)(*card)).collect()
    }

    /// Apply `predicate` on top of the current card view without changing any
    /// stored filter.
    #[must_use]
    pub fn simulated_card_view<'a>(
        &self,
        store: &'a CollectionStore,
        predicate: impl Fn(&FlashCard) -> bool,
    ) -> Vec<&'a FlashCard> {
        store
            .cards()
            .iter()
            .filter(|card| (self.cards)(*card) && predicate(*card))
            .collect()
    }

    /// Hide every card until [`FilteredViews::resume_card_browsing`] is called.
    pub fn suspend_card_browsing(&mut self) {
        if self.parked_cards.is_none() {
            let current = std::mem::replace(&mut self.cards, show_none());
            self.parked_cards = Some(current);
        }
    }

    /// Restore the last card filter set before or during the suspension.
    pub fn resume_card_browsing(&mut self) {
        if let Some(parked) = self.parked_cards.take() {
            self.cards = parked;
        }
    }

    #[must_use]
    pub fn is_card_browsing_suspended(&self) -> bool {
        self.parked_cards.is_some()
    }

    //
    // ─── DEADLINES ────────────────────────────────────────────────────────────
    //

    pub fn set_deadline_filter(&mut self, predicate: impl Fn(&Deadline) -> bool + 'static) {
        self.deadlines = Box::new(predicate);
    }

    pub fn show_all_deadlines(&mut self) {
        self.deadlines = show_all();
    }

    #[must_use]
    pub fn deadline_view<'a>(&self, store: &'a CollectionStore) -> Vec<&'a Deadline> {
        store
            .deadlines()
            .iter()
            .filter(|deadline| (self.deadlines)(*deadline))
            .collect()
    }

    //
    // ─── CATEGORIES ───────────────────────────────────────────────────────────
    //

    pub fn set_category_filter(&mut self, predicate: impl Fn(&Category) -> bool + 'static) {
        self.categories = Box::new(predicate);
    }

    pub fn show_all_categories(&mut self) {
        self.categories = show_all();
    }

    /// Categories used by any stored card, in order of first appearance, that
    /// pass the category filter.
    #[must_use]
    pub fn category_view(&self, store: &CollectionStore) -> Vec<Category> {
        let mut seen: Vec<Category> = Vec::new();
        for category in store.cards().iter().flat_map(FlashCard::categories) {
            if !seen.contains(category) {
                seen.push(category.clone());
            }
        }
        seen.retain(|category| (self.categories)(category));
        seen
    }
}

impl fmt::Debug for FilteredViews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredViews")
            .field("card_browsing_suspended", &self.is_card_browsing_suspended())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card, card_in, deadline};
    use flashdeck_core::model::Rating;

    fn store_with(cards: Vec<FlashCard>) -> CollectionStore {
        let mut store = CollectionStore::new();
        for c in cards {
            store.add_card(c).unwrap();
        }
        store
    }

    #[test]
    fn default_views_show_everything_in_insertion_order() {
        let store = store_with(vec![
            card("Q2", "A", Rating::Easy),
            card("Q1", "A", Rating::Hard),
        ]);
        let views = FilteredViews::new();
        let questions: Vec<_> = views
            .card_view(&store)
            .iter()
            .map(|c| c.question().as_str())
            .collect();
        assert_eq!(questions, ["Q2", "Q1"]);
    }

    #[test]
    fn views_are_live_across_store_mutations() {
        let mut store = store_with(vec![card("Q1", "A", Rating::Easy)]);
        let mut views = FilteredViews::new();
        views.set_card_filter(|c| c.rating() == Rating::Easy);

        let x = card("Q2", "A", Rating::Easy);
        store.add_card(x.clone()).unwrap();
        assert!(views.card_view(&store).contains(&&x));

        store.remove_card(&x).unwrap();
        assert!(!views.card_view(&store).contains(&&x));
    }

    #[test]
    fn simulated_view_composes_without_touching_filter() {
        let store = store_with(vec![
            card_in("Q1", "A", Rating::Easy, &["C"]),
            card_in("Q2", "A", Rating::Hard, &["C"]),
            card_in("Q3", "A", Rating::Easy, &["Java"]),
        ]);
        let mut views = FilteredViews::new();
        let c = Category::new("C").unwrap();
        views.set_card_filter(move |card| card.has_category(&c));

        let before = views.card_view(&store);
        let easy = views.simulated_card_view(&store, |card| card.rating() == Rating::Easy);
        assert_eq!(easy.len(), 1);
        assert_eq!(easy[0].question().as_str(), "Q1");
        assert_eq!(views.card_view(&store), before);
    }

    #[test]
    fn suspension_hides_cards_and_restores_last_filter() {
        let store = store_with(vec![
            card("Q1", "A", Rating::Easy),
            card("Q2", "A", Rating::Hard),
        ]);
        let mut views = FilteredViews::new();
        views.set_card_filter(|c| c.rating() == Rating::Hard);

        views.suspend_card_browsing();
        assert!(views.card_view(&store).is_empty());

        views.set_card_filter(|c| c.rating() == Rating::Easy);
        assert!(views.card_view(&store).is_empty());

        views.resume_card_browsing();
        let shown = views.card_view(&store);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].question().as_str(), "Q1");
    }

    #[test]
    fn categories_are_derived_deduplicated_and_filterable() {
        let store = store_with(vec![
            card_in("Q1", "A", Rating::Easy, &["CS2100", "C"]),
            card_in("Q2", "A", Rating::Easy, &["CS2105", "C"]),
        ]);
        let mut views = FilteredViews::new();
        let labels: Vec<_> = views
            .category_view(&store)
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();
        assert_eq!(labels, ["C", "CS2100", "CS2105"]);

        views.set_category_filter(|c| c.as_str().starts_with("CS"));
        assert_eq!(views.category_view(&store).len(), 2);
    }

    #[test]
    fn deadline_filter_is_independent() {
        let mut store = CollectionStore::new();
        store.add_deadline(deadline("Report", "12/11/2019")).unwrap();
        store.add_deadline(deadline("Project", "10/11/2019")).unwrap();
        let mut views = FilteredViews::new();
        views.set_deadline_filter(|d| d.task().as_str() == "Project");
        assert_eq!(views.deadline_view(&store).len(), 1);
        assert_eq!(views.card_view(&store).len(), 0);
        views.show_all_deadlines();
        assert_eq!(views.deadline_view(&store).len(), 2);
    }
}
