use chrono::NaiveDate;
use shared::{BalanceStats, CategoryStats, TransactionType};

use crate::domain::validate_date_range;
use crate::errors::Result;
use crate::storage::{DbConnection, TransactionRepository};

/// Report queries over the transaction table (not the rollup tables, which
/// only serve the history charts).
#[derive(Clone)]
pub struct StatsService {
    transaction_repository: TransactionRepository,
}

impl StatsService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            transaction_repository: TransactionRepository::new(db),
        }
    }

    /// Income and expense totals over a date range; a type with no
    /// transactions reports 0.
    pub async fn balance_stats(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<BalanceStats> {
        validate_date_range(from, to)?;

        let totals = self.transaction_repository.sum_by_type(user_id, from, to).await?;

        let mut stats = BalanceStats { income: 0.0, expense: 0.0 };
        for (transaction_type, total) in totals {
            match transaction_type {
                TransactionType::Income => stats.income = total,
                TransactionType::Expense => stats.expense = total,
            }
        }
        Ok(stats)
    }

    /// Per-category totals over a date range, largest first
    pub async fn categories_stats(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CategoryStats>> {
        validate_date_range(from, to)?;
        let stats = self
            .transaction_repository
            .sum_by_category(user_id, from, to)
            .await?;
        Ok(stats)
    }
}
