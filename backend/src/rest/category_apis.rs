//! # REST API for Categories

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use crate::errors::Result;
use crate::rest::{auth::AuthUser, AppState};
use shared::{CreateCategoryRequest, DeleteCategoryRequest, TransactionType};

// Query parameters for the category listing API; an unknown `type` value is
// rejected by serde before the handler runs
#[derive(Debug, Deserialize)]
pub struct CategoryListQuery {
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
}

/// List the caller's categories, optionally filtered by type
pub async fn list_categories(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<CategoryListQuery>,
) -> Result<impl IntoResponse> {
    info!("GET /api/categories - query: {:?}", query);

    let categories = state
        .category_service
        .list_categories(&user_id, query.transaction_type)
        .await?;
    Ok(Json(categories))
}

/// Create a new category
pub async fn create_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse> {
    info!("POST /api/categories - request: {:?}", request);

    let category = state.category_service.create_category(&user_id, request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Delete a category by (name, type)
pub async fn delete_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<DeleteCategoryRequest>,
) -> Result<impl IntoResponse> {
    info!("DELETE /api/categories - request: {:?}", request);

    let category = state.category_service.delete_category(&user_id, request).await?;
    Ok(Json(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::setup_test_state;

    fn create_request(name: &str, transaction_type: TransactionType) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
            icon: "🛒".to_string(),
            transaction_type,
        }
    }

    #[tokio::test]
    async fn test_create_category_handler() {
        let state = setup_test_state().await;

        let response = create_category(
            State(state),
            AuthUser("user1".to_string()),
            Json(create_request("Food", TransactionType::Expense)),
        )
        .await;
        assert_eq!(response.into_response().status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_duplicate_category_conflicts() {
        let state = setup_test_state().await;
        state
            .category_service
            .create_category("user1", create_request("Food", TransactionType::Expense))
            .await
            .unwrap();

        let response = create_category(
            State(state),
            AuthUser("user1".to_string()),
            Json(create_request("Food", TransactionType::Expense)),
        )
        .await;
        assert_eq!(response.into_response().status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_category_validation_error() {
        let state = setup_test_state().await;

        let response = create_category(
            State(state),
            AuthUser("user1".to_string()),
            Json(create_request("ab", TransactionType::Expense)),
        )
        .await;
        assert_eq!(response.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_category_not_found() {
        let state = setup_test_state().await;

        let response = delete_category(
            State(state),
            AuthUser("user1".to_string()),
            Json(DeleteCategoryRequest {
                name: "Ghost".to_string(),
                transaction_type: TransactionType::Expense,
            }),
        )
        .await;
        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_categories_filters_by_type() {
        let state = setup_test_state().await;
        state
            .category_service
            .create_category("user1", create_request("Food", TransactionType::Expense))
            .await
            .unwrap();
        state
            .category_service
            .create_category("user1", create_request("Salary", TransactionType::Income))
            .await
            .unwrap();

        let response = list_categories(
            State(state),
            AuthUser("user1".to_string()),
            Query(CategoryListQuery {
                transaction_type: Some(TransactionType::Income),
            }),
        )
        .await
        .unwrap();

        let body = axum::body::to_bytes(response.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        let categories: Vec<shared::Category> = serde_json::from_slice(&body).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Salary");
    }
}
