//! # REST API for Transactions
//!
//! Endpoints for listing, creating and deleting transactions.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::errors::Result;
use crate::rest::{auth::AuthUser, AppState};
use shared::CreateTransactionRequest;

// Query parameters for the transaction listing API
#[derive(Debug, Deserialize)]
pub struct TransactionListQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// List transactions in a date range, newest first
pub async fn list_transactions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<TransactionListQuery>,
) -> Result<impl IntoResponse> {
    info!("GET /api/transactions - query: {:?}", query);

    let transactions = state
        .transaction_service
        .list_transactions(&user_id, query.from, query.to)
        .await?;
    Ok(Json(transactions))
}

/// Create a new transaction
pub async fn create_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse> {
    info!("POST /api/transactions - request: {:?}", request);

    let transaction = state
        .transaction_service
        .create_transaction(&user_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Delete a transaction by ID
pub async fn delete_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    info!("DELETE /api/transactions/{}", id);

    let transaction = state.transaction_service.delete_transaction(&user_id, &id).await?;
    Ok(Json(transaction))
}
