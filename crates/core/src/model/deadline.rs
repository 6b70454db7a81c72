use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::collection::Identity;
use crate::model::Task;

/// Accepted input and display format for due dates, e.g. `10/11/2019`.
pub const DUE_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DueDateError {
    #[error("invalid due date `{0}` (expected dd/mm/yyyy)")]
    Invalid(String),
}

/// Calendar date a deadline is due on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DueDate(NaiveDate);

impl DueDate {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `dd/mm/yyyy` date.
    ///
    /// # Errors
    ///
    /// Returns `DueDateError::Invalid` if the text is not a real calendar date.
    pub fn parse(text: &str) -> Result<Self, DueDateError> {
        NaiveDate::parse_from_str(text.trim(), DUE_DATE_FORMAT)
            .map(Self)
            .map_err(|_| DueDateError::Invalid(text.to_string()))
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Signed number of days from `today` until the due date.
    #[must_use]
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.0 - today).num_days()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_DATE_FORMAT))
    }
}

/// A task with a due date. Identity is full structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deadline {
    task: Task,
    due_date: DueDate,
}

impl Deadline {
    #[must_use]
    pub fn new(task: Task, due_date: DueDate) -> Self {
        Self { task, due_date }
    }

    #[must_use]
    pub fn task(&self) -> &Task {
        &self.task
    }

    #[must_use]
    pub fn due_date(&self) -> DueDate {
        self.due_date
    }

    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date.date() < today
    }
}

impl Identity for Deadline {
    fn same_identity(&self, other: &Self) -> bool {
        self == other
    }
}
