use sqlx::Row;

use crate::storage::DbConnection;

/// One rollup bucket as stored, keyed by month or day depending on the
/// source table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBucket {
    /// Month number (1-12) for year buckets, day of month for month buckets
    pub period: u32,
    pub income: f64,
    pub expense: f64,
}

/// Read-side repository over the MonthHistory and YearHistory rollup tables
#[derive(Clone)]
pub struct HistoryRepository {
    db: DbConnection,
}

impl HistoryRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Distinct years a user has any recorded history for, ascending
    pub async fn distinct_years(&self, user_id: &str) -> Result<Vec<i32>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT year
            FROM month_history
            WHERE user_id = ?
            ORDER BY year ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(|row| row.get::<i64, _>("year") as i32).collect())
    }

    /// Per-month totals for one year, ordered by month
    pub async fn year_buckets(
        &self,
        user_id: &str,
        year: i32,
    ) -> Result<Vec<HistoryBucket>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT month, income, expense
            FROM year_history
            WHERE user_id = ? AND year = ?
            ORDER BY month ASC
            "#,
        )
        .bind(user_id)
        .bind(year as i64)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| HistoryBucket {
                period: row.get::<i64, _>("month") as u32,
                income: row.get("income"),
                expense: row.get("expense"),
            })
            .collect())
    }

    /// Per-day totals for one month, ordered by day
    pub async fn month_buckets(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<HistoryBucket>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT day, income, expense
            FROM month_history
            WHERE user_id = ? AND year = ? AND month = ?
            ORDER BY day ASC
            "#,
        )
        .bind(user_id)
        .bind(year as i64)
        .bind(month as i64)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| HistoryBucket {
                period: row.get::<i64, _>("day") as u32,
                income: row.get("income"),
                expense: row.get("expense"),
            })
            .collect())
    }
}
