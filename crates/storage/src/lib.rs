#![forbid(unsafe_code)]

pub mod exchange;
pub mod repository;
pub mod sample;
pub mod sqlite;

pub use exchange::{ExchangeError, export_cards, import_cards};
pub use repository::{Storage, StorageError};
pub use sample::sample_collection;
