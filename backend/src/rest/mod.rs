//! # REST API Interface Layer
//!
//! HTTP endpoints for the budget tracker. This layer translates requests
//! into domain calls and domain errors into status codes; business logic
//! lives in the services.

pub mod auth;
pub mod category_apis;
pub mod history_apis;
pub mod stats_apis;
pub mod transaction_apis;
pub mod user_settings_apis;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::domain::{
    CategoryService, HistoryService, StatsService, TransactionService, UserSettingsService,
};
use crate::storage::DbConnection;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub transaction_service: TransactionService,
    pub category_service: CategoryService,
    pub stats_service: StatsService,
    pub history_service: HistoryService,
    pub user_settings_service: UserSettingsService,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            transaction_service: TransactionService::new(db.clone()),
            category_service: CategoryService::new(db.clone()),
            stats_service: StatsService::new(db.clone()),
            history_service: HistoryService::new(db.clone()),
            user_settings_service: UserSettingsService::new(db),
        }
    }
}

/// Build the `/api` router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/transactions",
            get(transaction_apis::list_transactions).post(transaction_apis::create_transaction),
        )
        .route(
            "/transactions/:id",
            delete(transaction_apis::delete_transaction),
        )
        .route(
            "/categories",
            get(category_apis::list_categories)
                .post(category_apis::create_category)
                .delete(category_apis::delete_category),
        )
        .route("/stats/balance", get(stats_apis::balance_stats))
        .route("/stats/categories", get(stats_apis::categories_stats))
        .route("/history/periods", get(history_apis::history_periods))
        .route("/history/data", get(history_apis::history_data))
        .route(
            "/user-settings",
            get(user_settings_apis::get_user_settings).put(user_settings_apis::update_user_settings),
        )
        .route("/currencies", get(user_settings_apis::list_currencies));

    Router::new().nest("/api", api_routes).with_state(state)
}

#[cfg(test)]
pub(crate) async fn setup_test_state() -> AppState {
    let db = DbConnection::init_test().await.expect("Failed to create test database");
    AppState::new(db)
}
