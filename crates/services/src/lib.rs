#![forbid(unsafe_code)]

pub mod error;
pub mod filters;
pub mod import;
pub mod model_manager;
mod persistence;
pub mod sessions;
pub mod store;
pub mod views;

#[cfg(test)]
mod test_support;

pub use error::{ImportError, ModelError, ServiceError, SessionError};
pub use import::{CardSink, ImportReport, merge_imported};
pub use model_manager::ModelManager;
pub use sessions::{Advance, SessionOptions, SessionProgress, TestSession};
pub use store::CollectionStore;
pub use views::{FilteredViews, Predicate};
