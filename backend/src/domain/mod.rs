//! Business rules for the budget tracker: input validation, category
//! snapshot resolution, report shaping, and the supported currency table.

pub mod category_service;
pub mod currencies;
pub mod history_service;
pub mod stats_service;
pub mod transaction_service;
pub mod user_settings_service;

pub use category_service::CategoryService;
pub use history_service::HistoryService;
pub use stats_service::StatsService;
pub use transaction_service::TransactionService;
pub use user_settings_service::UserSettingsService;

use chrono::NaiveDate;
use shared::MAX_DATE_RANGE_DAYS;

use crate::errors::{Result, ServiceError};

/// Validate a report date range: `from <= to` and the span within the
/// allowed maximum.
pub fn validate_date_range(from: NaiveDate, to: NaiveDate) -> Result<()> {
    let days = (to - from).num_days();
    if days < 0 {
        return Err(ServiceError::validation("'from' must not be after 'to'"));
    }
    if days > MAX_DATE_RANGE_DAYS {
        return Err(ServiceError::validation(format!(
            "Date range must not exceed {} days",
            MAX_DATE_RANGE_DAYS
        )));
    }
    Ok(())
}
