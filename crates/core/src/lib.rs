#![forbid(unsafe_code)]

pub mod collection;
pub mod error;
pub mod model;

pub use collection::{CollectionError, Identity, UniqueList};
pub use error::Error;
