use async_trait::async_trait;
use flashdeck_core::model::{CollectionSnapshot, UserPrefs};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub(crate) fn check_score(score: u32) -> Result<(), StorageError> {
    if score > 100 {
        return Err(StorageError::Serialization(format!(
            "score {score} is outside 0..=100"
        )));
    }
    Ok(())
}

/// Repository contract for the card and deadline lists.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Load the saved collection, or an empty one if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be read or decoded.
    async fn load_collection(&self) -> Result<CollectionSnapshot, StorageError>;

    /// Replace the saved collection with `snapshot`, preserving list order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be stored.
    async fn save_collection(&self, snapshot: &CollectionSnapshot) -> Result<(), StorageError>;
}

/// Repository contract for committed session scores.
#[async_trait]
pub trait PerformanceRepository: Send + Sync {
    /// Scores in the order they were appended.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be read.
    async fn load_history(&self) -> Result<Vec<u32>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if `score` exceeds 100, or other
    /// storage errors.
    async fn append_score(&self, score: u32) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be cleared.
    async fn clear_history(&self) -> Result<(), StorageError>;
}

#[async_trait]
pub trait UserPrefsRepository: Send + Sync {
    /// Fetch saved preferences, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if preferences cannot be read.
    async fn get_prefs(&self) -> Result<Option<UserPrefs>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if preferences cannot be stored.
    async fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    collection: Arc<Mutex<CollectionSnapshot>>,
    history: Arc<Mutex<Vec<u32>>>,
    prefs: Arc<Mutex<Option<UserPrefs>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionRepository for InMemoryRepository {
    async fn load_collection(&self) -> Result<CollectionSnapshot, StorageError> {
        let guard = self
            .collection
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_collection(&self, snapshot: &CollectionSnapshot) -> Result<(), StorageError> {
        let mut guard = self
            .collection
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = snapshot.clone();
        Ok(())
    }
}

#[async_trait]
impl PerformanceRepository for InMemoryRepository {
    async fn load_history(&self) -> Result<Vec<u32>, StorageError> {
        let guard = self
            .history
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn append_score(&self, score: u32) -> Result<(), StorageError> {
        check_score(score)?;
        let mut guard = self
            .history
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(score);
        Ok(())
    }

    async fn clear_history(&self) -> Result<(), StorageError> {
        let mut guard = self
            .history
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.clear();
        Ok(())
    }
}

#[async_trait]
impl UserPrefsRepository for InMemoryRepository {
    async fn get_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        let guard = self
            .prefs
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError> {
        let mut guard = self
            .prefs
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(prefs.clone());
        Ok(())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub collection: Arc<dyn CollectionRepository>,
    pub performance: Arc<dyn PerformanceRepository>,
    pub prefs: Arc<dyn UserPrefsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let collection: Arc<dyn CollectionRepository> = Arc::new(repo.clone());
        let performance: Arc<dyn PerformanceRepository> = Arc::new(repo.clone());
        let prefs: Arc<dyn UserPrefsRepository> = Arc::new(repo);
        Self {
            collection,
            performance,
            prefs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck_core::model::UserPrefsDraft;

    use crate::sample::sample_collection;

    #[tokio::test]
    async fn collection_round_trips_in_order() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_collection().await.unwrap().is_empty());

        let snapshot = sample_collection();
        repo.save_collection(&snapshot).await.unwrap();
        assert_eq!(repo.load_collection().await.unwrap(), snapshot);
    }

    #[tokio::test]
    async fn history_appends_and_clears() {
        let repo = InMemoryRepository::new();
        repo.append_score(50).await.unwrap();
        repo.append_score(100).await.unwrap();
        assert_eq!(repo.load_history().await.unwrap(), vec![50, 100]);

        let err = repo.append_score(101).await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));

        repo.clear_history().await.unwrap();
        assert!(repo.load_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_handles_share_state() {
        let storage = Storage::in_memory();
        assert!(storage.prefs.get_prefs().await.unwrap().is_none());

        let prefs = UserPrefsDraft {
            shuffle_tests: true,
            ..UserPrefsDraft::default()
        }
        .validate()
        .unwrap();
        storage.prefs.save_prefs(&prefs).await.unwrap();
        assert_eq!(storage.prefs.get_prefs().await.unwrap(), Some(prefs));
    }
}
