//! Borrower model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Borrower record
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Borrower {
    pub id: i32,
    pub name: String,
    /// Free-form contact (email, phone, ...)
    pub contact: String,
}

/// Create or replace borrower request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BorrowerRequest {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,
    #[validate(required(message = "contact is required"))]
    pub contact: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_contact() {
        let request: BorrowerRequest = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        let errors = request.validate().unwrap_err().to_string();
        assert!(errors.contains("contact is required"));
    }
}
