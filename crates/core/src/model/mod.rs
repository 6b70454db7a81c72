mod card;
mod category;
mod deadline;
mod performance;
mod rating;
mod snapshot;
mod text;
mod user_prefs;

pub use card::FlashCard;
pub use category::{Category, CategoryError};
pub use deadline::{DUE_DATE_FORMAT, Deadline, DueDate, DueDateError};
pub use performance::{GradeTally, PerformanceError, PerformanceTracker};
pub use rating::{Rating, RatingError};
pub use snapshot::CollectionSnapshot;
pub use text::{Answer, Question, Task, TextError};
pub use user_prefs::{DEFAULT_DATA_URL, UserPrefs, UserPrefsDraft, UserPrefsError};
