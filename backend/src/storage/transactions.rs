use chrono::{Datelike, NaiveDate};
use shared::{CategoryStats, Transaction, TransactionType};
use sqlx::{sqlite::SqliteRow, Row};

use crate::storage::DbConnection;

/// Repository for transaction rows and their month/year rollups.
///
/// Every write goes through a SQL transaction that touches the transaction
/// table and both rollup tables together, so the rollups stay equal to the
/// per-period sums of the underlying rows.
#[derive(Clone)]
pub struct TransactionRepository {
    db: DbConnection,
}

impl TransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a transaction and upsert-increment the matching MonthHistory
    /// and YearHistory buckets. All three writes commit or none does.
    pub async fn create_with_rollups(
        &self,
        user_id: &str,
        transaction: &Transaction,
    ) -> Result<(), sqlx::Error> {
        let (income, expense) = amount_by_type(transaction);
        let date = transaction.date;

        let mut db_tx = self.db.pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO transactions (id, user_id, amount, description, date, type, category, category_icon)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&transaction.id)
        .bind(user_id)
        .bind(transaction.amount)
        .bind(&transaction.description)
        .bind(date.to_string())
        .bind(transaction.transaction_type.as_str())
        .bind(&transaction.category)
        .bind(&transaction.category_icon)
        .execute(&mut *db_tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO month_history (user_id, day, month, year, income, expense)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (day, month, year, user_id)
            DO UPDATE SET income = income + excluded.income,
                          expense = expense + excluded.expense
            "#,
        )
        .bind(user_id)
        .bind(date.day() as i64)
        .bind(date.month() as i64)
        .bind(date.year() as i64)
        .bind(income)
        .bind(expense)
        .execute(&mut *db_tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO year_history (user_id, month, year, income, expense)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (month, year, user_id)
            DO UPDATE SET income = income + excluded.income,
                          expense = expense + excluded.expense
            "#,
        )
        .bind(user_id)
        .bind(date.month() as i64)
        .bind(date.year() as i64)
        .bind(income)
        .bind(expense)
        .execute(&mut *db_tx)
        .await?;

        db_tx.commit().await?;
        Ok(())
    }

    /// Delete a transaction and decrement the matching rollup buckets.
    /// The caller passes the row it already fetched, so the decrement
    /// amounts match what was originally added.
    pub async fn delete_with_rollups(
        &self,
        user_id: &str,
        transaction: &Transaction,
    ) -> Result<(), sqlx::Error> {
        let (income, expense) = amount_by_type(transaction);
        let date = transaction.date;

        let mut db_tx = self.db.pool().begin().await?;

        sqlx::query("DELETE FROM transactions WHERE id = ? AND user_id = ?")
            .bind(&transaction.id)
            .bind(user_id)
            .execute(&mut *db_tx)
            .await?;

        sqlx::query(
            r#"
            UPDATE month_history
            SET income = income - ?, expense = expense - ?
            WHERE user_id = ? AND day = ? AND month = ? AND year = ?
            "#,
        )
        .bind(income)
        .bind(expense)
        .bind(user_id)
        .bind(date.day() as i64)
        .bind(date.month() as i64)
        .bind(date.year() as i64)
        .execute(&mut *db_tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE year_history
            SET income = income - ?, expense = expense - ?
            WHERE user_id = ? AND month = ? AND year = ?
            "#,
        )
        .bind(income)
        .bind(expense)
        .bind(user_id)
        .bind(date.month() as i64)
        .bind(date.year() as i64)
        .execute(&mut *db_tx)
        .await?;

        db_tx.commit().await?;
        Ok(())
    }

    /// Get a transaction by ID, scoped to its owner
    pub async fn get(&self, user_id: &str, id: &str) -> Result<Option<Transaction>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, amount, description, date, type, category, category_icon
            FROM transactions
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| row_to_transaction(&r)))
    }

    /// List a user's transactions in a date range, newest first
    pub async fn list(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, amount, description, date, type, category, category_icon
            FROM transactions
            WHERE user_id = ? AND date >= ? AND date <= ?
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(from.to_string())
        .bind(to.to_string())
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(row_to_transaction).collect())
    }

    /// Sum amounts grouped by type over a date range
    pub async fn sum_by_type(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<(TransactionType, f64)>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT type, SUM(amount) AS total
            FROM transactions
            WHERE user_id = ? AND date >= ? AND date <= ?
            GROUP BY type
            "#,
        )
        .bind(user_id)
        .bind(from.to_string())
        .bind(to.to_string())
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| {
                (
                    parse_type(&row.get::<String, _>("type")),
                    row.get::<f64, _>("total"),
                )
            })
            .collect())
    }

    /// Sum amounts grouped by (type, category) over a date range,
    /// largest totals first
    pub async fn sum_by_category(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CategoryStats>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT type, category, category_icon, SUM(amount) AS total
            FROM transactions
            WHERE user_id = ? AND date >= ? AND date <= ?
            GROUP BY type, category, category_icon
            ORDER BY total DESC
            "#,
        )
        .bind(user_id)
        .bind(from.to_string())
        .bind(to.to_string())
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| CategoryStats {
                transaction_type: parse_type(&row.get::<String, _>("type")),
                category: row.get("category"),
                category_icon: row.get("category_icon"),
                amount: row.get("total"),
            })
            .collect())
    }
}

fn amount_by_type(transaction: &Transaction) -> (f64, f64) {
    match transaction.transaction_type {
        TransactionType::Income => (transaction.amount, 0.0),
        TransactionType::Expense => (0.0, transaction.amount),
    }
}

fn parse_type(value: &str) -> TransactionType {
    value.parse().unwrap_or(TransactionType::Income)
}

fn row_to_transaction(row: &SqliteRow) -> Transaction {
    Transaction {
        id: row.get("id"),
        date: row
            .get::<String, _>("date")
            .parse()
            .unwrap_or_default(),
        description: row.get("description"),
        amount: row.get("amount"),
        transaction_type: parse_type(&row.get::<String, _>("type")),
        category: row.get("category"),
        category_icon: row.get("category_icon"),
    }
}
