use async_trait::async_trait;
use flashdeck_core::model::CollectionSnapshot;
use sqlx::{Sqlite, Transaction};

use super::SqliteRepository;
use super::mapping::{group_categories, map_card_row, map_deadline_row, position_to_i64};
use crate::repository::{CollectionRepository, StorageError};

#[async_trait]
impl CollectionRepository for SqliteRepository {
    async fn load_collection(&self) -> Result<CollectionSnapshot, StorageError> {
        let category_rows = sqlx::query(
            r"
            SELECT card_position, category
            FROM card_categories
            ORDER BY card_position ASC, category ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut categories = group_categories(&category_rows)?;

        let card_rows = sqlx::query(
            r"
            SELECT position, question, answer, rating
            FROM flashcards
            ORDER BY position ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut cards = Vec::with_capacity(card_rows.len());
        for row in &card_rows {
            cards.push(map_card_row(row, &mut categories)?);
        }

        let deadline_rows = sqlx::query(
            r"
            SELECT task, due_date
            FROM deadlines
            ORDER BY position ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut deadlines = Vec::with_capacity(deadline_rows.len());
        for row in &deadline_rows {
            deadlines.push(map_deadline_row(row)?);
        }

        Ok(CollectionSnapshot::new(cards, deadlines))
    }

    async fn save_collection(&self, snapshot: &CollectionSnapshot) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if let Err(err) = replace_rows(&mut tx, snapshot).await {
            tx.rollback()
                .await
                .map_err(|e| StorageError::Connection(e.to_string()))?;
            return Err(err);
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        tracing::debug!(
            cards = snapshot.cards.len(),
            deadlines = snapshot.deadlines.len(),
            "saved collection"
        );
        Ok(())
    }
}

async fn replace_rows(
    tx: &mut Transaction<'_, Sqlite>,
    snapshot: &CollectionSnapshot,
) -> Result<(), StorageError> {
    for table in ["card_categories", "flashcards", "deadlines"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut **tx)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
    }

    for (index, card) in snapshot.cards.iter().enumerate() {
        let position = position_to_i64(index)?;
        sqlx::query(
            r"
            INSERT INTO flashcards (position, question, answer, rating)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(position)
        .bind(card.question().as_str())
        .bind(card.answer().as_str())
        .bind(card.rating().as_str())
        .execute(&mut **tx)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        for category in card.categories() {
            sqlx::query(
                r"
                INSERT INTO card_categories (card_position, category)
                VALUES (?1, ?2)
                ",
            )
            .bind(position)
            .bind(category.as_str())
            .execute(&mut **tx)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        }
    }

    for (index, deadline) in snapshot.deadlines.iter().enumerate() {
        sqlx::query(
            r"
            INSERT INTO deadlines (position, task, due_date)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(position_to_i64(index)?)
        .bind(deadline.task().as_str())
        .bind(deadline.due_date().date())
        .execute(&mut **tx)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;
    }

    Ok(())
}
