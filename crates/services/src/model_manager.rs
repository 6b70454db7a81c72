use flashdeck_core::CollectionError;
use flashdeck_core::model::{
    Answer, Category, CollectionSnapshot, Deadline, FlashCard, GradeTally, PerformanceTracker,
    Question, Rating, UserPrefs,
};

use crate::error::{ModelError, SessionError};
use crate::import::{CardSink, ImportReport, merge_imported};
use crate::sessions::{Advance, SessionOptions, SessionProgress, TestSession};
use crate::store::CollectionStore;
use crate::views::FilteredViews;

/// In-memory model of the whole application.
///
/// Owns the collection store, the filtered views over it, the optional test
/// session and the performance history. Construct one per process and pass it
/// by reference to whatever executes commands.
#[derive(Debug, Default)]
pub struct ModelManager {
    store: CollectionStore,
    views: FilteredViews,
    session: Option<TestSession>,
    performance: PerformanceTracker,
    prefs: UserPrefs,
}

impl ModelManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager from previously saved parts.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateItem` if the snapshot violates uniqueness.
    pub fn from_parts(
        snapshot: CollectionSnapshot,
        performance: PerformanceTracker,
        prefs: UserPrefs,
    ) -> Result<Self, CollectionError> {
        let store = CollectionStore::from_snapshot(snapshot)?;
        tracing::debug!(
            cards = store.cards().len(),
            deadlines = store.deadlines().len(),
            scores = performance.history().len(),
            data_url = prefs.data_url(),
            "initializing model"
        );
        Ok(Self {
            store,
            views: FilteredViews::new(),
            session: None,
            performance,
            prefs,
        })
    }

    //
    // ─── PREFS ────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    pub fn set_prefs(&mut self, prefs: UserPrefs) {
        self.prefs = prefs;
    }

    //
    // ─── COLLECTION ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn has_card(&self, card: &FlashCard) -> bool {
        self.store.has_card(card)
    }

    /// Add a card and reset the card and category filters so it is visible.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateItem` if an identity-equal card exists.
    pub fn add_card(&mut self, card: FlashCard) -> Result<(), CollectionError> {
        self.store.add_card(card)?;
        self.views.show_all_cards();
        self.views.show_all_categories();
        Ok(())
    }

    /// Replace `target` with `edited` in place.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::ItemNotFound` if `target` is absent, or
    /// `CollectionError::DuplicateItem` if `edited` collides with another card.
    pub fn set_card(&mut self, target: &FlashCard, edited: FlashCard) -> Result<(), CollectionError> {
        self.store.set_card(target, edited)
    }

    /// # Errors
    ///
    /// Returns `CollectionError::ItemNotFound` if the card is absent.
    pub fn remove_card(&mut self, card: &FlashCard) -> Result<FlashCard, CollectionError> {
        self.store.remove_card(card)
    }

    #[must_use]
    pub fn has_deadline(&self, deadline: &Deadline) -> bool {
        self.store.has_deadline(deadline)
    }

    /// Add a deadline and reset the deadline filter.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateItem` if an equal deadline exists.
    pub fn add_deadline(&mut self, deadline: Deadline) -> Result<(), CollectionError> {
        self.store.add_deadline(deadline)?;
        self.views.show_all_deadlines();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CollectionError::ItemNotFound` or `CollectionError::DuplicateItem`.
    pub fn set_deadline(
        &mut self,
        target: &Deadline,
        edited: Deadline,
    ) -> Result<(), CollectionError> {
        self.store.set_deadline(target, edited)
    }

    /// # Errors
    ///
    /// Returns `CollectionError::ItemNotFound` if the deadline is absent.
    pub fn remove_deadline(&mut self, deadline: &Deadline) -> Result<Deadline, CollectionError> {
        self.store.remove_deadline(deadline)
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateItem` if either list violates
    /// uniqueness; nothing changes in that case.
    pub fn reset_from(&mut self, snapshot: CollectionSnapshot) -> Result<(), CollectionError> {
        self.store.reset_from(snapshot)
    }

    #[must_use]
    pub fn snapshot(&self) -> CollectionSnapshot {
        self.store.snapshot()
    }

    /// Every stored card, unfiltered.
    #[must_use]
    pub fn cards(&self) -> &[FlashCard] {
        self.store.cards()
    }

    /// Every stored deadline, unfiltered.
    #[must_use]
    pub fn deadlines(&self) -> &[Deadline] {
        self.store.deadlines()
    }

    //
    // ─── VIEWS ────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn card_view(&self) -> Vec<&FlashCard> {
        self.views.card_view(&self.store)
    }

    pub fn set_card_filter(&mut self, predicate: impl Fn(&FlashCard) -> bool + 'static) {
        self.views.set_card_filter(predicate);
    }

    pub fn show_all_cards(&mut self) {
        self.views.show_all_cards();
    }

    #[must_use]
    pub fn deadline_view(&self) -> Vec<&Deadline> {
        self.views.deadline_view(&self.store)
    }

    pub fn set_deadline_filter(&mut self, predicate: impl Fn(&Deadline) -> bool + 'static) {
        self.views.set_deadline_filter(predicate);
    }

    #[must_use]
    pub fn category_view(&self) -> Vec<Category> {
        self.views.category_view(&self.store)
    }

    pub fn set_category_filter(&mut self, predicate: impl Fn(&Category) -> bool + 'static) {
        self.views.set_category_filter(predicate);
    }

    /// Evaluate `predicate` over the current card view without changing any filter.
    #[must_use]
    pub fn simulated_card_view(&self, predicate: impl Fn(&FlashCard) -> bool) -> Vec<&FlashCard> {
        self.views.simulated_card_view(&self.store, predicate)
    }

    //
    // ─── TEST SESSION ─────────────────────────────────────────────────────────
    //

    /// Start a test over a snapshot of `cards` in the given order and hide the
    /// card view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyActive` if a session is running, or
    /// `SessionError::Empty` if `cards` is empty.
    pub fn start_session(&mut self, cards: Vec<FlashCard>) -> Result<(), SessionError> {
        self.start_session_with(cards, SessionOptions::default())
    }

    /// Start a test over every stored card, or only those in `category`,
    /// shuffled when the preferences ask for it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyActive` if a session is running, or
    /// `SessionError::Empty` if no card matches.
    pub fn start_session_for(&mut self, category: Option<&Category>) -> Result<(), SessionError> {
        let cards = self
            .store
            .cards()
            .iter()
            .filter(|card| category.is_none_or(|c| card.has_category(c)))
            .cloned()
            .collect();
        let options = SessionOptions {
            shuffle: self.prefs.shuffle_tests(),
        };
        self.start_session_with(cards, options)
    }

    /// # Errors
    ///
    /// See [`ModelManager::start_session`].
    pub fn start_session_with(
        &mut self,
        cards: Vec<FlashCard>,
        options: SessionOptions,
    ) -> Result<(), SessionError> {
        if self.session.is_some() {
            return Err(SessionError::AlreadyActive);
        }
        let session = TestSession::with_options(cards, options)?;
        tracing::info!(cards = session.cards().len(), shuffled = options.shuffle, "test started");
        self.session = Some(session);
        self.views.suspend_card_browsing();
        Ok(())
    }

    #[must_use]
    pub fn has_active_session(&self) -> bool {
        self.session.is_some()
    }

    fn session(&self) -> Result<&TestSession, SessionError> {
        self.session.as_ref().ok_or(SessionError::NoActiveSession)
    }

    fn session_mut(&mut self) -> Result<&mut TestSession, SessionError> {
        self.session.as_mut().ok_or(SessionError::NoActiveSession)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` if no test is running.
    pub fn reveal(&mut self) -> Result<(), SessionError> {
        self.session_mut()?.reveal();
        Ok(())
    }

    /// Move to the next card. `Advance::Complete` means the caller should end the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` or `SessionError::NotRevealedYet`.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        self.session_mut()?.advance()
    }

    /// Discard the session and restore the card view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` if no test is running.
    pub fn end_session(&mut self) -> Result<(), SessionError> {
        let session = self.session.take().ok_or(SessionError::NoActiveSession)?;
        self.views.resume_card_browsing();
        tracing::info!(
            cursor = session.cursor(),
            cards = session.cards().len(),
            "test ended"
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` if no test is running.
    pub fn current_card(&self) -> Result<&FlashCard, SessionError> {
        Ok(self.session()?.current_card())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` if no test is running.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        Ok(self.session()?.current_question())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` if no test is running.
    pub fn current_answer(&self) -> Result<&Answer, SessionError> {
        Ok(self.session()?.current_answer())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` if no test is running.
    pub fn is_revealed(&self) -> Result<bool, SessionError> {
        Ok(self.session()?.is_revealed())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` if no test is running.
    pub fn session_progress(&self) -> Result<SessionProgress, SessionError> {
        Ok(self.session()?.progress())
    }

    //
    // ─── PERFORMANCE ──────────────────────────────────────────────────────────
    //

    pub fn record_outcome(&mut self, rating: Rating) {
        self.store.record_outcome(rating);
    }

    /// Outcomes recorded since the last commit.
    #[must_use]
    pub fn test_stats(&self) -> GradeTally {
        self.store.tally()
    }

    /// Score the recorded outcomes, append the score and clear the tally.
    ///
    /// # Errors
    ///
    /// Returns `PerformanceError::NoGradedCards` if nothing was recorded; the
    /// history and tally are left untouched.
    pub fn commit_session(&mut self) -> Result<u32, ModelError> {
        let score = self.performance.commit_tally(&self.store.tally())?;
        self.store.clear_tally();
        Ok(score)
    }

    /// Count cards per rating within the current card view.
    #[must_use]
    pub fn rating_breakdown(&self) -> GradeTally {
        let count = |rating: Rating| {
            let matching = self.simulated_card_view(move |card| card.rating() == rating).len();
            u32::try_from(matching).unwrap_or(u32::MAX)
        };
        GradeTally::new(count(Rating::Easy), count(Rating::Good), count(Rating::Hard))
    }

    /// Score the ratings of the cards currently in view and append the score.
    ///
    /// # Errors
    ///
    /// Returns `PerformanceError::NoGradedCards` if the view is empty.
    pub fn commit_view_performance(&mut self) -> Result<u32, ModelError> {
        let breakdown = self.rating_breakdown();
        Ok(self.performance.commit_tally(&breakdown)?)
    }

    #[must_use]
    pub fn history(&self) -> &[u32] {
        self.performance.history()
    }

    pub fn reset_history(&mut self) {
        self.performance.reset();
    }

    //
    // ─── IMPORT ───────────────────────────────────────────────────────────────
    //

    /// Merge externally parsed cards, skipping duplicates.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::NoImportableData` when `candidates` is `None`.
    pub fn merge_imported(
        &mut self,
        candidates: Option<Vec<FlashCard>>,
    ) -> Result<ImportReport, ModelError> {
        Ok(merge_imported(self, candidates)?)
    }
}

impl CardSink for ModelManager {
    fn has_card(&self, card: &FlashCard) -> bool {
        ModelManager::has_card(self, card)
    }

    fn add_card(&mut self, card: FlashCard) -> Result<(), CollectionError> {
        ModelManager::add_card(self, card)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
