use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use flashdeck_core::model::{
    Answer, Category, Deadline, DueDate, FlashCard, Question, Rating, Task,
};
use sqlx::Row;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn position_to_i64(index: usize) -> Result<i64, StorageError> {
    i64::try_from(index).map_err(|_| StorageError::Serialization("position overflow".into()))
}

pub(crate) fn score_from_i64(v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid score: {v}")))
}

/// Group `(card_position, category)` rows by card.
pub(crate) fn group_categories(
    rows: &[sqlx::sqlite::SqliteRow],
) -> Result<HashMap<i64, BTreeSet<Category>>, StorageError> {
    let mut by_card: HashMap<i64, BTreeSet<Category>> = HashMap::new();
    for row in rows {
        let position: i64 = row.try_get("card_position").map_err(ser)?;
        let label: String = row.try_get("category").map_err(ser)?;
        by_card
            .entry(position)
            .or_default()
            .insert(Category::new(label).map_err(ser)?);
    }
    Ok(by_card)
}

pub(crate) fn map_card_row(
    row: &sqlx::sqlite::SqliteRow,
    categories: &mut HashMap<i64, BTreeSet<Category>>,
) -> Result<FlashCard, StorageError> {
    let position: i64 = row.try_get("position").map_err(ser)?;
    let question = Question::new(row.try_get::<String, _>("question").map_err(ser)?).map_err(ser)?;
    let answer = Answer::new(row.try_get::<String, _>("answer").map_err(ser)?).map_err(ser)?;
    let rating: Rating = row
        .try_get::<String, _>("rating")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;

    Ok(FlashCard::new(
        question,
        answer,
        rating,
        categories.remove(&position).unwrap_or_default(),
    ))
}

pub(crate) fn map_deadline_row(row: &sqlx::sqlite::SqliteRow) -> Result<Deadline, StorageError> {
    let task = Task::new(row.try_get::<String, _>("task").map_err(ser)?).map_err(ser)?;
    let due_date: NaiveDate = row.try_get("due_date").map_err(ser)?;
    Ok(Deadline::new(task, DueDate::new(due_date)))
}
