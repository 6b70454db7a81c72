//! Shared error types for the services crate.

use thiserror::Error;

use flashdeck_core::CollectionError;
use flashdeck_core::model::PerformanceError;
use storage::repository::StorageError;

/// Errors emitted by the test-session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no cards available for a test session")]
    Empty,
    #[error("a test session is already running")]
    AlreadyActive,
    #[error("no test session is running")]
    NoActiveSession,
    #[error("the answer must be revealed before moving on")]
    NotRevealedYet,
}

/// Errors emitted by the import merge.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImportError {
    #[error("could not find any flashcards to import")]
    NoImportableData,
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Errors emitted by `ModelManager` operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Performance(#[from] PerformanceError),
}

/// Errors emitted while loading or persisting the model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<CollectionError> for ServiceError {
    fn from(err: CollectionError) -> Self {
        Self::Model(ModelError::Collection(err))
    }
}

impl From<PerformanceError> for ServiceError {
    fn from(err: PerformanceError) -> Self {
        Self::Model(ModelError::Performance(err))
    }
}
