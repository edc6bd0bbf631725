//! # REST API for Balance and Category Statistics

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::errors::Result;
use crate::rest::{auth::AuthUser, AppState};

// Shared query shape for both stats endpoints
#[derive(Debug, Deserialize)]
pub struct OverviewQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Income/expense totals over a date range
pub async fn balance_stats(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<OverviewQuery>,
) -> Result<impl IntoResponse> {
    info!("GET /api/stats/balance - query: {:?}", query);

    let stats = state
        .stats_service
        .balance_stats(&user_id, query.from, query.to)
        .await?;
    Ok(Json(stats))
}

/// Per-category totals over a date range, largest first
pub async fn categories_stats(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<OverviewQuery>,
) -> Result<impl IntoResponse> {
    info!("GET /api/stats/categories - query: {:?}", query);

    let stats = state
        .stats_service
        .categories_stats(&user_id, query.from, query.to)
        .await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::setup_test_state;
    use axum::http::StatusCode;
    use shared::{BalanceStats, CreateCategoryRequest, CreateTransactionRequest, TransactionType};

    fn query(from: &str, to: &str) -> OverviewQuery {
        OverviewQuery {
            from: from.parse().unwrap(),
            to: to.parse().unwrap(),
        }
    }

    async fn seed_transaction(state: &AppState, amount: f64, transaction_type: TransactionType) {
        let name = match transaction_type {
            TransactionType::Income => "Salary",
            TransactionType::Expense => "Food",
        };
        let _ = state
            .category_service
            .create_category(
                "user1",
                CreateCategoryRequest {
                    name: name.to_string(),
                    icon: "💰".to_string(),
                    transaction_type,
                },
            )
            .await;
        state
            .transaction_service
            .create_transaction(
                "user1",
                CreateTransactionRequest {
                    amount,
                    description: None,
                    date: "2026-03-14".parse().unwrap(),
                    transaction_type,
                    category: name.to_string(),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_balance_stats_handler() {
        let state = setup_test_state().await;
        seed_transaction(&state, 1000.0, TransactionType::Income).await;
        seed_transaction(&state, 250.0, TransactionType::Expense).await;

        let response = balance_stats(
            State(state),
            AuthUser("user1".to_string()),
            Query(query("2026-03-01", "2026-03-31")),
        )
        .await
        .unwrap();

        let body = axum::body::to_bytes(response.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        let stats: BalanceStats = serde_json::from_slice(&body).unwrap();
        assert_eq!(stats.income, 1000.0);
        assert_eq!(stats.expense, 250.0);
    }

    #[tokio::test]
    async fn test_stats_reject_oversized_range() {
        let state = setup_test_state().await;

        let response = balance_stats(
            State(state),
            AuthUser("user1".to_string()),
            Query(query("2026-01-01", "2026-12-31")),
        )
        .await;
        assert_eq!(response.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_categories_stats_handler() {
        let state = setup_test_state().await;
        seed_transaction(&state, 40.0, TransactionType::Expense).await;
        seed_transaction(&state, 1000.0, TransactionType::Income).await;

        let response = categories_stats(
            State(state),
            AuthUser("user1".to_string()),
            Query(query("2026-03-01", "2026-03-31")),
        )
        .await
        .unwrap();

        let body = axum::body::to_bytes(response.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        let stats: Vec<shared::CategoryStats> = serde_json::from_slice(&body).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].category, "Salary");
    }
}
