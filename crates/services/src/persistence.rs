use flashdeck_core::model::PerformanceTracker;
use storage::repository::Storage;

use crate::error::ServiceError;
use crate::model_manager::ModelManager;

impl ModelManager {
    /// Build a manager from whatever `storage` holds. Missing preferences fall
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if a repository fails, or
    /// `ServiceError::Model` if the saved data violates uniqueness or holds an
    /// impossible score.
    pub async fn load(storage: &Storage) -> Result<Self, ServiceError> {
        let snapshot = storage.collection.load_collection().await?;
        let history = storage.performance.load_history().await?;
        let prefs = storage.prefs.get_prefs().await?.unwrap_or_default();

        let performance = PerformanceTracker::from_history(history)?;
        Ok(Self::from_parts(snapshot, performance, prefs)?)
    }

    /// Write the collection and preferences back to `storage`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if a repository fails.
    pub async fn persist(&self, storage: &Storage) -> Result<(), ServiceError> {
        storage.collection.save_collection(&self.snapshot()).await?;
        storage.prefs.save_prefs(self.prefs()).await?;
        tracing::debug!("persisted model");
        Ok(())
    }

    /// Commit the current session and append the score to `storage`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Model` if nothing was graded (nothing is
    /// written), or `ServiceError::Storage` if the append fails.
    pub async fn commit_session_persisted(&mut self, storage: &Storage) -> Result<u32, ServiceError> {
        let score = self.commit_session()?;
        storage.performance.append_score(score).await?;
        Ok(score)
    }

    /// Clear the score history both in memory and in `storage`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the repository cannot be cleared; the
    /// in-memory history is left as it was.
    pub async fn reset_history_persisted(&mut self, storage: &Storage) -> Result<(), ServiceError> {
        storage.performance.clear_history().await?;
        self.reset_history();
        Ok(())
    }
}
