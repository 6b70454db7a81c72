use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{StorageError, UserPrefsRepository};
use flashdeck_core::model::{UserPrefs, UserPrefsDraft};

use super::SqliteRepository;

#[async_trait]
impl UserPrefsRepository for SqliteRepository {
    async fn get_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT data_url, style_sheet, shuffle_tests
            FROM user_prefs
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let data_url: String = row
            .try_get("data_url")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let style_sheet: Option<String> = row
            .try_get("style_sheet")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let shuffle_tests: bool = row
            .try_get("shuffle_tests")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        UserPrefs::from_persisted(UserPrefsDraft {
            data_url: Some(data_url),
            style_sheet,
            shuffle_tests,
        })
        .map(Some)
        .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO user_prefs (id, data_url, style_sheet, shuffle_tests)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                data_url = excluded.data_url,
                style_sheet = excluded.style_sheet,
                shuffle_tests = excluded.shuffle_tests
            ",
        )
        .bind(1_i64)
        .bind(prefs.data_url())
        .bind(prefs.style_sheet())
        .bind(prefs.shuffle_tests())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
