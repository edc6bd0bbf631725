//! Shapes rollup rows into the chart series: 12 month buckets for a year
//! view, one bucket per day for a month view, zero-filled between the rows
//! that exist.

use chrono::{Datelike, NaiveDate, Utc};
use shared::{HistoryData, Timeframe};

use crate::errors::{Result, ServiceError};
use crate::storage::{DbConnection, HistoryRepository};

#[derive(Clone)]
pub struct HistoryService {
    history_repository: HistoryRepository,
}

impl HistoryService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            history_repository: HistoryRepository::new(db),
        }
    }

    /// Years the user has any history for; defaults to the current year so
    /// the period picker always has something to show.
    pub async fn history_periods(&self, user_id: &str) -> Result<Vec<i32>> {
        let years = self.history_repository.distinct_years(user_id).await?;
        if years.is_empty() {
            return Ok(vec![Utc::now().year()]);
        }
        Ok(years)
    }

    /// Bucketed history for a period. A period with no data at all returns
    /// an empty series rather than a zero-filled one.
    pub async fn history_data(
        &self,
        user_id: &str,
        timeframe: Timeframe,
        year: i32,
        month: Option<u32>,
    ) -> Result<Vec<HistoryData>> {
        if !(2000..=3000).contains(&year) {
            return Err(ServiceError::validation("Year must be between 2000 and 3000"));
        }

        match timeframe {
            Timeframe::Year => self.year_history(user_id, year).await,
            Timeframe::Month => {
                let month = month
                    .ok_or_else(|| ServiceError::validation("Month is required for a month timeframe"))?;
                if !(1..=12).contains(&month) {
                    return Err(ServiceError::validation("Month must be between 1 and 12"));
                }
                self.month_history(user_id, year, month).await
            }
        }
    }

    async fn year_history(&self, user_id: &str, year: i32) -> Result<Vec<HistoryData>> {
        let buckets = self.history_repository.year_buckets(user_id, year).await?;
        if buckets.is_empty() {
            return Ok(Vec::new());
        }

        let history = (1..=12)
            .map(|month| {
                let bucket = buckets.iter().find(|b| b.period == month);
                HistoryData {
                    year,
                    month,
                    day: None,
                    income: bucket.map(|b| b.income).unwrap_or(0.0),
                    expense: bucket.map(|b| b.expense).unwrap_or(0.0),
                }
            })
            .collect();
        Ok(history)
    }

    async fn month_history(&self, user_id: &str, year: i32, month: u32) -> Result<Vec<HistoryData>> {
        let buckets = self
            .history_repository
            .month_buckets(user_id, year, month)
            .await?;
        if buckets.is_empty() {
            return Ok(Vec::new());
        }

        let days = days_in_month(year, month)
            .ok_or_else(|| ServiceError::validation("Invalid year/month"))?;
        let history = (1..=days)
            .map(|day| {
                let bucket = buckets.iter().find(|b| b.period == day);
                HistoryData {
                    year,
                    month,
                    day: Some(day),
                    income: bucket.map(|b| b.income).unwrap_or(0.0),
                    expense: bucket.map(|b| b.expense).unwrap_or(0.0),
                }
            })
            .collect();
        Ok(history)
    }
}

/// Number of days in a calendar month, leap-year aware
fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next_month - first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TransactionRepository;
    use shared::{Transaction, TransactionType};

    async fn create_test_service() -> (HistoryService, TransactionRepository) {
        let db = DbConnection::init_test().await.unwrap();
        (HistoryService::new(db.clone()), TransactionRepository::new(db))
    }

    async fn record(repo: &TransactionRepository, id: &str, date: &str, amount: f64, transaction_type: TransactionType) {
        let tx = Transaction {
            id: id.to_string(),
            date: date.parse().unwrap(),
            description: String::new(),
            amount,
            transaction_type,
            category: "Misc".to_string(),
            category_icon: "📦".to_string(),
        };
        repo.create_with_rollups("user1", &tx).await.unwrap();
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), Some(31));
        assert_eq!(days_in_month(2026, 2), Some(28));
        assert_eq!(days_in_month(2028, 2), Some(29));
        assert_eq!(days_in_month(2026, 12), Some(31));
        assert_eq!(days_in_month(2026, 13), None);
    }

    #[tokio::test]
    async fn test_periods_default_to_current_year() {
        let (service, _) = create_test_service().await;

        let periods = service.history_periods("user1").await.unwrap();
        assert_eq!(periods, vec![Utc::now().year()]);
    }

    #[tokio::test]
    async fn test_periods_list_recorded_years() {
        let (service, repo) = create_test_service().await;

        record(&repo, "t1", "2024-07-01", 10.0, TransactionType::Income).await;
        record(&repo, "t2", "2026-01-01", 10.0, TransactionType::Income).await;

        let periods = service.history_periods("user1").await.unwrap();
        assert_eq!(periods, vec![2024, 2026]);
    }

    #[tokio::test]
    async fn test_year_history_zero_fills_twelve_buckets() {
        let (service, repo) = create_test_service().await;

        record(&repo, "t1", "2026-03-14", 100.0, TransactionType::Income).await;
        record(&repo, "t2", "2026-11-02", 30.0, TransactionType::Expense).await;

        let history = service
            .history_data("user1", Timeframe::Year, 2026, None)
            .await
            .unwrap();

        assert_eq!(history.len(), 12);
        assert_eq!(history[2].month, 3);
        assert_eq!(history[2].income, 100.0);
        assert_eq!(history[10].expense, 30.0);
        // Untouched months are present and zero
        assert_eq!(history[0].income, 0.0);
        assert_eq!(history[0].expense, 0.0);
        assert!(history.iter().all(|h| h.day.is_none()));
    }

    #[tokio::test]
    async fn test_empty_period_returns_empty_series() {
        let (service, repo) = create_test_service().await;

        record(&repo, "t1", "2026-03-14", 100.0, TransactionType::Income).await;

        let other_year = service
            .history_data("user1", Timeframe::Year, 2020, None)
            .await
            .unwrap();
        assert!(other_year.is_empty());

        let other_month = service
            .history_data("user1", Timeframe::Month, 2026, Some(4))
            .await
            .unwrap();
        assert!(other_month.is_empty());
    }

    #[tokio::test]
    async fn test_month_history_one_bucket_per_day() {
        let (service, repo) = create_test_service().await;

        record(&repo, "t1", "2028-02-05", 50.0, TransactionType::Expense).await;
        record(&repo, "t2", "2028-02-29", 10.0, TransactionType::Income).await;

        let history = service
            .history_data("user1", Timeframe::Month, 2028, Some(2))
            .await
            .unwrap();

        // 2028 is a leap year
        assert_eq!(history.len(), 29);
        assert_eq!(history[4].day, Some(5));
        assert_eq!(history[4].expense, 50.0);
        assert_eq!(history[28].income, 10.0);
        assert_eq!(history[0].income, 0.0);
    }

    #[tokio::test]
    async fn test_history_data_validation() {
        let (service, _) = create_test_service().await;

        let bad_year = service.history_data("user1", Timeframe::Year, 1999, None).await;
        assert!(matches!(bad_year, Err(ServiceError::Validation(_))));

        let missing_month = service.history_data("user1", Timeframe::Month, 2026, None).await;
        assert!(matches!(missing_month, Err(ServiceError::Validation(_))));

        let bad_month = service.history_data("user1", Timeframe::Month, 2026, Some(13)).await;
        assert!(matches!(bad_month, Err(ServiceError::Validation(_))));
    }
}
