use thiserror::Error;
use url::Url;

/// Default database location used when nothing else is configured.
pub const DEFAULT_DATA_URL: &str = "sqlite:flashdeck.sqlite3?mode=rwc";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserPrefs {
    data_url: String,
    style_sheet: Option<String>,
    shuffle_tests: bool,
}

#[derive(Clone, Debug, Default)]
pub struct UserPrefsDraft {
    pub data_url: Option<String>,
    pub style_sheet: Option<String>,
    pub shuffle_tests: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserPrefsError {
    #[error("invalid data URL `{0}` (expected a sqlite: URL)")]
    InvalidDataUrl(String),
}

impl UserPrefsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft into usable preferences.
    ///
    /// # Errors
    ///
    /// Returns `UserPrefsError::InvalidDataUrl` if the data URL is present but
    /// does not parse as a `sqlite:` URL.
    pub fn validate(self) -> Result<UserPrefs, UserPrefsError> {
        let data_url =
            normalize_optional(self.data_url).unwrap_or_else(|| DEFAULT_DATA_URL.to_string());
        let style_sheet = normalize_optional(self.style_sheet);

        match Url::parse(&data_url) {
            Ok(url) if url.scheme() == "sqlite" => {}
            _ => return Err(UserPrefsError::InvalidDataUrl(data_url)),
        }

        Ok(UserPrefs {
            data_url,
            style_sheet,
            shuffle_tests: self.shuffle_tests,
        })
    }
}

impl UserPrefs {
    /// Rebuild preferences from persisted columns.
    ///
    /// # Errors
    ///
    /// Returns `UserPrefsError` if the stored data URL is no longer valid.
    pub fn from_persisted(draft: UserPrefsDraft) -> Result<Self, UserPrefsError> {
        draft.validate()
    }

    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    #[must_use]
    pub fn style_sheet(&self) -> Option<&str> {
        self.style_sheet.as_deref()
    }

    #[must_use]
    pub fn shuffle_tests(&self) -> bool {
        self.shuffle_tests
    }

    #[must_use]
    pub fn to_draft(&self) -> UserPrefsDraft {
        UserPrefsDraft {
            data_url: Some(self.data_url.clone()),
            style_sheet: self.style_sheet.clone(),
            shuffle_tests: self.shuffle_tests,
        }
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            style_sheet: None,
            shuffle_tests: false,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_falls_back_to_defaults() {
        let prefs = UserPrefsDraft::new().validate().unwrap();
        assert_eq!(prefs, UserPrefs::default());
    }

    #[test]
    fn blank_optionals_are_dropped() {
        let prefs = UserPrefsDraft {
            data_url: Some("  sqlite:cards.db ".into()),
            style_sheet: Some("   ".into()),
            shuffle_tests: true,
        }
        .validate()
        .unwrap();
        assert_eq!(prefs.data_url(), "sqlite:cards.db");
        assert_eq!(prefs.style_sheet(), None);
        assert!(prefs.shuffle_tests());
    }

    #[test]
    fn non_sqlite_urls_are_rejected() {
        let err = UserPrefsDraft {
            data_url: Some("https://example.com/db".into()),
            ..UserPrefsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, UserPrefsError::InvalidDataUrl(_)));
    }
}
