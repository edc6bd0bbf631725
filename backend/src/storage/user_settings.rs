use shared::UserSettings;
use sqlx::Row;

use crate::storage::DbConnection;

/// Repository for per-user settings
#[derive(Clone)]
pub struct UserSettingsRepository {
    db: DbConnection,
}

impl UserSettingsRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Get a user's settings row
    pub async fn get(&self, user_id: &str) -> Result<Option<UserSettings>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT user_id, currency
            FROM user_settings
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| UserSettings {
            user_id: r.get("user_id"),
            currency: r.get("currency"),
        }))
    }

    /// Insert a settings row. Ignored if one already exists, so concurrent
    /// first reads cannot race each other into an error.
    pub async fn insert(&self, user_id: &str, currency: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO user_settings (user_id, currency)
            VALUES (?, ?)
            "#,
        )
        .bind(user_id)
        .bind(currency)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Update a user's currency preference, returning whether a row existed
    pub async fn update_currency(&self, user_id: &str, currency: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE user_settings SET currency = ? WHERE user_id = ?
            "#,
        )
        .bind(currency)
        .bind(user_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
