//! Borrowing transaction model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::date;

/// Borrowing transaction record.
///
/// `borrower_name` is the borrower's name as recorded when the book was
/// lent, not a reference to a `borrowers` row.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Transaction {
    pub id: i32,
    pub book_id: i32,
    pub borrower_name: String,
    /// YYYY-MM-DD
    #[serde(serialize_with = "date::serialize")]
    pub borrow_date: Option<NaiveDate>,
    /// YYYY-MM-DD, set by the server on creation
    #[serde(serialize_with = "date::serialize")]
    pub transaction_date: Option<NaiveDate>,
}

/// Create transaction request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTransaction {
    #[validate(required(message = "book_id is required"))]
    pub book_id: Option<i32>,
    #[validate(required(message = "borrower_name is required"))]
    pub borrower_name: Option<String>,
    /// Defaults to the current date
    pub borrow_date: Option<NaiveDate>,
}

/// Partial transaction update; omitted fields keep their stored value
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTransaction {
    pub book_id: Option<i32>,
    pub borrower_name: Option<String>,
    pub borrow_date: Option<NaiveDate>,
    /// Absent keeps the stored value, `null` clears it
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub transaction_date: Option<Option<NaiveDate>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_transaction_date() {
        let transaction = Transaction {
            id: 1,
            book_id: 5,
            borrower_name: "Alice".to_string(),
            borrow_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            transaction_date: None,
        };
        let json = serde_json::to_value(&transaction).unwrap();
        assert_eq!(json["borrow_date"], "2024-03-01");
        assert!(json["transaction_date"].is_null());
    }

    #[test]
    fn test_create_ignores_supplied_transaction_date() {
        let request: CreateTransaction = serde_json::from_str(
            r#"{"book_id": 5, "borrower_name": "Alice", "transaction_date": "1999-01-01"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert!(request.borrow_date.is_none());
    }

    #[test]
    fn test_create_requires_book_and_borrower() {
        let request: CreateTransaction = serde_json::from_str(r#"{}"#).unwrap();
        let errors = request.validate().unwrap_err().to_string();
        assert!(errors.contains("book_id is required"));
        assert!(errors.contains("borrower_name is required"));
    }

    #[test]
    fn test_update_distinguishes_absent_and_null_transaction_date() {
        let absent: UpdateTransaction = serde_json::from_str(r#"{"borrower_name": "Bob"}"#).unwrap();
        assert_eq!(absent.transaction_date, None);

        let cleared: UpdateTransaction =
            serde_json::from_str(r#"{"transaction_date": null}"#).unwrap();
        assert_eq!(cleared.transaction_date, Some(None));

        let set: UpdateTransaction =
            serde_json::from_str(r#"{"transaction_date": "2024-04-02"}"#).unwrap();
        assert_eq!(set.transaction_date, Some(NaiveDate::from_ymd_opt(2024, 4, 2)));
    }
}
