use thiserror::Error;

use crate::collection::CollectionError;
use crate::model::{
    CategoryError, DueDateError, PerformanceError, RatingError, TextError, UserPrefsError,
};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error(transparent)]
    TextValidation(#[from] TextError),
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    DueDate(#[from] DueDateError),
    #[error(transparent)]
    Performance(#[from] PerformanceError),
    #[error(transparent)]
    UserPrefs(#[from] UserPrefsError),
}
