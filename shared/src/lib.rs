use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum span, in days, accepted for report date ranges.
pub const MAX_DATE_RANGE_DAYS: i64 = 90;

/// Direction of a transaction. Amounts are stored non-negative; the type
/// carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

/// A recorded income or expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Calendar date the transaction applies to (not the insertion time)
    pub date: NaiveDate,
    pub description: String,
    /// Non-negative amount; direction comes from `transaction_type`
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Category name snapshot taken at creation time
    pub category: String,
    /// Category icon snapshot taken at creation time
    pub category_icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: f64,
    /// Optional free-text description (max 256 characters)
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Name of an existing category of the same type
    pub category: String,
}

/// A user-defined spending or income bucket. Transactions reference
/// categories by name snapshot, so deleting one never cascades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name (3-20 characters)
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCategoryRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Income and expense totals over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceStats {
    pub income: f64,
    pub expense: f64,
}

/// Per-category totals over a date range, ordered by amount descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub category_icon: String,
    pub amount: f64,
}

/// Granularity of a history query: one bucket per month of a year, or one
/// bucket per day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Year,
    Month,
}

/// One time bucket of the history chart. `day` is present only for
/// month-timeframe queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryData {
    pub year: i32,
    /// Month number, 1-12
    pub month: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_id: String,
    /// ISO currency code, one of the supported currency table
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserSettingsRequest {
    pub currency: String,
}

/// A supported display currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub value: String,
    pub label: String,
    pub locale: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_round_trips_through_str() {
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("expense".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("transfer".parse::<TransactionType>().is_err());
        assert_eq!(TransactionType::Expense.to_string(), "expense");
    }

    #[test]
    fn transaction_serializes_type_field_lowercase() {
        let tx = Transaction {
            id: "t1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            description: "Groceries".to_string(),
            amount: 42.5,
            transaction_type: TransactionType::Expense,
            category: "Food".to_string(),
            category_icon: "🍕".to_string(),
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["date"], "2026-03-14");
    }

    #[test]
    fn history_data_omits_day_for_year_buckets() {
        let bucket = HistoryData {
            year: 2026,
            month: 7,
            day: None,
            income: 10.0,
            expense: 0.0,
        };

        let json = serde_json::to_value(&bucket).unwrap();
        assert!(json.get("day").is_none());
    }
}
