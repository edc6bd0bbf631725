//! # REST API for User Settings and Currencies

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::errors::Result;
use crate::rest::{auth::AuthUser, AppState};
use shared::UpdateUserSettingsRequest;

/// Fetch the caller's settings, creating defaults on first access
pub async fn get_user_settings(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse> {
    info!("GET /api/user-settings");

    let settings = state.user_settings_service.get_or_create(&user_id).await?;
    Ok(Json(settings))
}

/// Change the caller's currency preference
pub async fn update_user_settings(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<UpdateUserSettingsRequest>,
) -> Result<impl IntoResponse> {
    info!("PUT /api/user-settings - request: {:?}", request);

    let settings = state
        .user_settings_service
        .update_currency(&user_id, &request.currency)
        .await?;
    Ok(Json(settings))
}

/// The supported currency table
pub async fn list_currencies(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.user_settings_service.currencies())
}
