//! Transaction write/read paths: validation, category snapshot resolution,
//! and the atomic rollup maintenance that keeps MonthHistory/YearHistory in
//! step with the transaction table.

use chrono::NaiveDate;
use shared::{CreateTransactionRequest, Transaction};
use tracing::info;
use uuid::Uuid;

use crate::domain::validate_date_range;
use crate::errors::{Result, ServiceError};
use crate::storage::{CategoryRepository, DbConnection, TransactionRepository};

#[derive(Clone)]
pub struct TransactionService {
    transaction_repository: TransactionRepository,
    category_repository: CategoryRepository,
}

impl TransactionService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            transaction_repository: TransactionRepository::new(db.clone()),
            category_repository: CategoryRepository::new(db),
        }
    }

    /// Create a transaction. The category icon is snapshotted onto the row,
    /// and both rollup tables are incremented in the same SQL transaction.
    pub async fn create_transaction(
        &self,
        user_id: &str,
        request: CreateTransactionRequest,
    ) -> Result<Transaction> {
        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(ServiceError::validation("Amount must be a positive number"));
        }
        let description = request.description.unwrap_or_default();
        if description.len() > 256 {
            return Err(ServiceError::validation(
                "Description must be at most 256 characters",
            ));
        }

        let category = self
            .category_repository
            .get(user_id, &request.category, request.transaction_type)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category not found"))?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            date: request.date,
            description,
            amount: request.amount,
            transaction_type: request.transaction_type,
            category: category.name,
            category_icon: category.icon,
        };

        self.transaction_repository
            .create_with_rollups(user_id, &transaction)
            .await?;

        info!(
            "Created {} transaction {} ({} {:.2})",
            transaction.transaction_type, transaction.id, transaction.category, transaction.amount
        );
        Ok(transaction)
    }

    /// Delete a transaction, decrementing its rollup buckets atomically
    pub async fn delete_transaction(&self, user_id: &str, id: &str) -> Result<Transaction> {
        let transaction = self
            .transaction_repository
            .get(user_id, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Transaction not found"))?;

        self.transaction_repository
            .delete_with_rollups(user_id, &transaction)
            .await?;

        info!("Deleted transaction {}", transaction.id);
        Ok(transaction)
    }

    /// List transactions in a date range, newest first
    pub async fn list_transactions(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        validate_date_range(from, to)?;
        let transactions = self.transaction_repository.list(user_id, from, to).await?;
        Ok(transactions)
    }
}
