use shared::{Category, TransactionType};
use sqlx::Row;

use crate::storage::DbConnection;

/// Repository for category operations
#[derive(Clone)]
pub struct CategoryRepository {
    db: DbConnection,
}

impl CategoryRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store a category in the database
    pub async fn create(&self, user_id: &str, category: &Category) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO categories (user_id, name, icon, type)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(&category.name)
        .bind(&category.icon)
        .bind(category.transaction_type.as_str())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Get a category by its (name, type) key
    pub async fn get(
        &self,
        user_id: &str,
        name: &str,
        transaction_type: TransactionType,
    ) -> Result<Option<Category>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT name, icon, type
            FROM categories
            WHERE user_id = ? AND name = ? AND type = ?
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(transaction_type.as_str())
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| Category {
            name: r.get("name"),
            icon: r.get("icon"),
            transaction_type,
        }))
    }

    /// List a user's categories ordered by name, optionally filtered by type
    pub async fn list(
        &self,
        user_id: &str,
        transaction_type: Option<TransactionType>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let rows = match transaction_type {
            Some(t) => {
                sqlx::query(
                    r#"
                    SELECT name, icon, type
                    FROM categories
                    WHERE user_id = ? AND type = ?
                    ORDER BY name ASC
                    "#,
                )
                .bind(user_id)
                .bind(t.as_str())
                .fetch_all(self.db.pool())
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT name, icon, type
                    FROM categories
                    WHERE user_id = ?
                    ORDER BY name ASC
                    "#,
                )
                .bind(user_id)
                .fetch_all(self.db.pool())
                .await?
            }
        };

        let categories = rows
            .iter()
            .map(|row| Category {
                name: row.get("name"),
                icon: row.get("icon"),
                transaction_type: row
                    .get::<String, _>("type")
                    .parse()
                    .unwrap_or(TransactionType::Income),
            })
            .collect();

        Ok(categories)
    }

    /// Delete a category by its (name, type) key, returning whether a row
    /// existed
    pub async fn delete(
        &self,
        user_id: &str,
        name: &str,
        transaction_type: TransactionType,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories WHERE user_id = ? AND name = ? AND type = ?
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(transaction_type.as_str())
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
