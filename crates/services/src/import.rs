use flashdeck_core::CollectionError;
use flashdeck_core::model::FlashCard;

use crate::error::ImportError;
use crate::store::CollectionStore;

/// Destination for imported cards.
pub trait CardSink {
    fn has_card(&self, card: &FlashCard) -> bool;

    /// # Errors
    ///
    /// Returns `CollectionError` if the card cannot be added.
    fn add_card(&mut self, card: FlashCard) -> Result<(), CollectionError>;
}

impl CardSink for CollectionStore {
    fn has_card(&self, card: &FlashCard) -> bool {
        CollectionStore::has_card(self, card)
    }

    fn add_card(&mut self, card: FlashCard) -> Result<(), CollectionError> {
        CollectionStore::add_card(self, card)
    }
}

/// Counts produced by a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub duplicates: usize,
}

impl ImportReport {
    /// True when every candidate was already present (or there were none).
    #[must_use]
    pub fn nothing_new(&self) -> bool {
        self.added == 0
    }
}

/// Merge externally parsed cards into `sink`, skipping identity duplicates.
///
/// `None` means the source could not be read; `Some(vec![])` is a readable
/// source with no cards. Each card is committed on its own: if a later card
/// fails, earlier ones stay added.
///
/// # Errors
///
/// Returns `ImportError::NoImportableData` for `None` (no mutation happens),
/// or `ImportError::Collection` if the sink rejects a card.
pub fn merge_imported<S: CardSink + ?Sized>(
    sink: &mut S,
    candidates: Option<Vec<FlashCard>>,
) -> Result<ImportReport, ImportError> {
    let candidates = candidates.ok_or(ImportError::NoImportableData)?;
    let mut report = ImportReport::default();

    for card in candidates {
        if sink.has_card(&card) {
            report.duplicates += 1;
        } else {
            sink.add_card(card)?;
            report.added += 1;
        }
    }

    tracing::debug!(
        added = report.added,
        duplicates = report.duplicates,
        "merged imported flashcards"
    );
    Ok(report)
}
