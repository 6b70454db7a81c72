use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TextError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

fn normalize(raw: String, field: &'static str) -> Result<String, TextError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TextError::Empty { field });
    }
    if trimmed.len() == raw.len() {
        Ok(raw)
    } else {
        Ok(trimmed.to_string())
    }
}

/// The prompt side of a flashcard (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Question(String);

impl Question {
    /// Create a validated question.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the text is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TextError> {
        normalize(value.into(), "question").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The revealed side of a flashcard (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Answer(String);

impl Answer {
    /// Create a validated answer.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the text is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TextError> {
        normalize(value.into(), "answer").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Description of a deadline's task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Task(String);

impl Task {
    /// Create a validated task description.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the text is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TextError> {
        normalize(value.into(), "task").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed() {
        let q = Question::new("  What is a pointer?  ").unwrap();
        assert_eq!(q.as_str(), "What is a pointer?");
    }

    #[test]
    fn blank_text_is_rejected_with_field_name() {
        assert_eq!(
            Answer::new(" \t ").unwrap_err(),
            TextError::Empty { field: "answer" }
        );
        assert_eq!(
            Task::new("").unwrap_err().to_string(),
            "task cannot be empty"
        );
    }
}
