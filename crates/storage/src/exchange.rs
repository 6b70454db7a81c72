//! JSON card exchange files used by the import and export commands.

use std::fs;
use std::io;
use std::path::Path;

use flashdeck_core::model::{Answer, Category, FlashCard, Question, Rating};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EXCHANGE_VERSION: u32 = 1;

fn corrupt<E: std::fmt::Display>(e: E) -> ExchangeError {
    ExchangeError::Corrupt(e.to_string())
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExchangeError {
    #[error("unsupported file extension for `{0}` (expected .json)")]
    UnsupportedExtension(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("corrupt exchange file: {0}")]
    Corrupt(String),
}

/// Serialized shape of a single card in an exchange file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub question: String,
    pub answer: String,
    pub rating: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl CardRecord {
    #[must_use]
    pub fn from_card(card: &FlashCard) -> Self {
        Self {
            question: card.question().as_str().to_owned(),
            answer: card.answer().as_str().to_owned(),
            rating: card.rating().as_str().to_owned(),
            categories: card
                .categories()
                .iter()
                .map(|c| c.as_str().to_owned())
                .collect(),
        }
    }

    /// Convert the record back into a domain `FlashCard`.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::Corrupt` if any field fails validation.
    pub fn into_card(self) -> Result<FlashCard, ExchangeError> {
        let question = Question::new(self.question).map_err(corrupt)?;
        let answer = Answer::new(self.answer).map_err(corrupt)?;
        let rating: Rating = self.rating.parse().map_err(corrupt)?;
        let categories = self
            .categories
            .into_iter()
            .map(Category::new)
            .collect::<Result<_, _>>()
            .map_err(corrupt)?;
        Ok(FlashCard::new(question, answer, rating, categories))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ExchangeFile {
    version: u32,
    flashcards: Vec<CardRecord>,
}

fn ensure_json(path: &Path) -> Result<(), ExchangeError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(())
    } else {
        Err(ExchangeError::UnsupportedExtension(
            path.display().to_string(),
        ))
    }
}

/// Write `cards` to `path`, replacing any existing file. Returns the number written.
///
/// # Errors
///
/// Returns `ExchangeError::UnsupportedExtension` for non-`.json` paths, or
/// `ExchangeError::Io` if the file cannot be written.
pub fn export_cards<'a, I>(path: &Path, cards: I) -> Result<usize, ExchangeError>
where
    I: IntoIterator<Item = &'a FlashCard>,
{
    ensure_json(path)?;
    let file = ExchangeFile {
        version: EXCHANGE_VERSION,
        flashcards: cards.into_iter().map(CardRecord::from_card).collect(),
    };
    let json = serde_json::to_string_pretty(&file).map_err(corrupt)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), cards = file.flashcards.len(), "exported flashcards");
    Ok(file.flashcards.len())
}

/// Read cards from an exchange file.
///
/// Returns `Ok(None)` when the file does not exist, and `Ok(Some(vec![]))` for
/// a readable file with no cards.
///
/// # Errors
///
/// Returns `ExchangeError::UnsupportedExtension` for non-`.json` paths,
/// `ExchangeError::Corrupt` if the contents cannot be decoded, or
/// `ExchangeError::Io` for other read failures.
pub fn import_cards(path: &Path) -> Result<Option<Vec<FlashCard>>, ExchangeError> {
    ensure_json(path)?;
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let file: ExchangeFile = serde_json::from_str(&json).map_err(corrupt)?;
    let cards = file
        .flashcards
        .into_iter()
        .map(CardRecord::into_card)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(path = %path.display(), cards = cards.len(), "read exchange file");
    Ok(Some(cards))
}
