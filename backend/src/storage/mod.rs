//! # SQLite Storage Layer
//!
//! Owns the connection pool, the schema, and one repository per aggregate.
//! Repositories speak `sqlx::Error`; translation to HTTP-facing errors
//! happens in the domain layer.

pub mod categories;
pub mod history;
pub mod transactions;
pub mod user_settings;

pub use categories::CategoryRepository;
pub use history::HistoryRepository;
pub use transactions::TransactionRepository;
pub use user_settings::UserSettingsRepository;

use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
const DEFAULT_DATABASE_URL: &str = "sqlite:budget-tracker.db";

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self, sqlx::Error> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize the standard database, honoring `BUDGET_TRACKER_DB`
    pub async fn init() -> Result<Self, sqlx::Error> {
        let url =
            std::env::var("BUDGET_TRACKER_DB").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Self::new(&url).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self, sqlx::Error> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_settings (
                user_id TEXT PRIMARY KEY,
                currency TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                icon TEXT NOT NULL,
                type TEXT NOT NULL DEFAULT 'income',
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (name, user_id, type)
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Category name and icon are snapshots, deliberately not foreign keys
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS transactions (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                amount REAL NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                type TEXT NOT NULL DEFAULT 'income',
                category TEXT NOT NULL,
                category_icon TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Index for range scans on the report queries
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_transactions_user_date
            ON transactions(user_id, date);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS month_history (
                user_id TEXT NOT NULL,
                day INTEGER NOT NULL,
                month INTEGER NOT NULL,
                year INTEGER NOT NULL,
                income REAL NOT NULL DEFAULT 0,
                expense REAL NOT NULL DEFAULT 0,
                PRIMARY KEY (day, month, year, user_id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS year_history (
                user_id TEXT NOT NULL,
                month INTEGER NOT NULL,
                year INTEGER NOT NULL,
                income REAL NOT NULL DEFAULT 0,
                expense REAL NOT NULL DEFAULT 0,
                PRIMARY KEY (month, year, user_id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        // Running setup again against the same pool must not fail
        DbConnection::setup_schema(db.pool())
            .await
            .expect("Schema setup should be idempotent");
    }
}
