use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{score_from_i64, ser};
use crate::repository::{PerformanceRepository, StorageError, check_score};

#[async_trait]
impl PerformanceRepository for SqliteRepository {
    async fn load_history(&self) -> Result<Vec<u32>, StorageError> {
        let rows = sqlx::query("SELECT score FROM performance ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.iter()
            .map(|row| score_from_i64(row.try_get::<i64, _>("score").map_err(ser)?))
            .collect()
    }

    async fn append_score(&self, score: u32) -> Result<(), StorageError> {
        check_score(score)?;
        sqlx::query(
            r"
            INSERT INTO performance (score, recorded_at)
            VALUES (?1, ?2)
            ",
        )
        .bind(i64::from(score))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }

    async fn clear_history(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM performance")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}
