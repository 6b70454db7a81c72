mod progress;
mod test_session;

// Public API of the test-session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use test_session::{Advance, SessionOptions, TestSession};
