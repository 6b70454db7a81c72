use std::collections::BTreeSet;

use thiserror::Error;

/// Validated category label (trimmed, non-empty, alphanumeric).
///
/// Categories are not stored on their own; the category list is derived from
/// the union of every card's category set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    /// Create a validated category.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::Empty` if the label is empty after trimming, or
    /// `CategoryError::NotAlphanumeric` if it contains anything else.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryError::Empty);
        }
        if !trimmed.chars().all(char::is_alphanumeric) {
            return Err(CategoryError::NotAlphanumeric(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build a category set from labels, skipping duplicates.
    ///
    /// # Errors
    ///
    /// Returns the first `CategoryError` encountered.
    pub fn set_from(labels: &[&str]) -> Result<BTreeSet<Category>, CategoryError> {
        labels.iter().map(|label| Category::new(*label)).collect()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category cannot be empty")]
    Empty,
    #[error("category `{0}` must be alphanumeric")]
    NotAlphanumeric(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_trimmed() {
        assert_eq!(Category::new(" CS2100 ").unwrap().as_str(), "CS2100");
    }

    #[test]
    fn category_rejects_spaces_and_symbols() {
        assert_eq!(
            Category::new("data structures").unwrap_err(),
            CategoryError::NotAlphanumeric("data structures".into())
        );
        assert_eq!(Category::new("  ").unwrap_err(), CategoryError::Empty);
    }

    #[test]
    fn set_from_deduplicates_by_label() {
        let set = Category::set_from(&["C", "POINTER", "C"]).unwrap();
        assert_eq!(set.len(), 2);
    }
}
