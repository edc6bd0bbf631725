//! # REST API for History Charts

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use crate::errors::Result;
use crate::rest::{auth::AuthUser, AppState};
use shared::Timeframe;

#[derive(Debug, Deserialize)]
pub struct HistoryDataQuery {
    pub timeframe: Timeframe,
    pub year: i32,
    /// Required when `timeframe` is `month`
    pub month: Option<u32>,
}

/// Years the caller has recorded history for
pub async fn history_periods(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse> {
    info!("GET /api/history/periods");

    let periods = state.history_service.history_periods(&user_id).await?;
    Ok(Json(periods))
}

/// Bucketed income/expense series for a year or a month
pub async fn history_data(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<HistoryDataQuery>,
) -> Result<impl IntoResponse> {
    info!("GET /api/history/data - query: {:?}", query);

    let data = state
        .history_service
        .history_data(&user_id, query.timeframe, query.year, query.month)
        .await?;
    Ok(Json(data))
}
