//! Book model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::date;

/// Book record
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Publication date (YYYY-MM-DD)
    #[serde(serialize_with = "date::serialize")]
    pub published_date: Option<NaiveDate>,
}

/// Create or replace book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookRequest {
    #[validate(required(message = "title is required"))]
    pub title: Option<String>,
    #[validate(required(message = "author is required"))]
    pub author: Option<String>,
    /// Publication date (YYYY-MM-DD)
    #[validate(required(message = "published_date is required"))]
    pub published_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_serializes_date_as_text() {
        let book = Book {
            id: 7,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            published_date: NaiveDate::from_ymd_opt(1965, 8, 1),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "title": "Dune",
                "author": "Herbert",
                "published_date": "1965-08-01"
            })
        );
    }

    #[test]
    fn test_request_requires_every_field() {
        let request: BookRequest = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        let errors = request.validate().unwrap_err().to_string();
        assert!(errors.contains("author is required"));
        assert!(errors.contains("published_date is required"));
        assert!(!errors.contains("title is required"));
    }

    #[test]
    fn test_complete_request_is_valid() {
        let request: BookRequest = serde_json::from_str(
            r#"{"title": "Dune", "author": "Herbert", "published_date": "1965-08-01"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.published_date, NaiveDate::from_ymd_opt(1965, 8, 1));
    }
}
