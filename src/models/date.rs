//! Canonical `YYYY-MM-DD` rendering for dates leaving the service

use chrono::NaiveDate;
use serde::Serializer;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a stored date as `YYYY-MM-DD`, keeping absence as `None`
pub fn format_date(value: Option<NaiveDate>) -> Option<String> {
    value.map(|date| date.format(DATE_FORMAT).to_string())
}

/// `serialize_with` adapter: a date string or JSON `null`
pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match format_date(*value) {
        Some(text) => serializer.serialize_str(&text),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Dated {
        #[serde(serialize_with = "serialize")]
        borrow_date: Option<NaiveDate>,
        #[serde(serialize_with = "serialize")]
        transaction_date: Option<NaiveDate>,
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(format_date(date).as_deref(), Some("2024-03-01"));
        assert_eq!(format_date(None), None);
    }

    #[test]
    fn test_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(987, 1, 9);
        assert_eq!(format_date(date).as_deref(), Some("0987-01-09"));
    }

    #[test]
    fn test_serialize_null_and_present() {
        let value = Dated {
            borrow_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            transaction_date: None,
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"borrow_date":"2024-03-01","transaction_date":null}"#);
    }
}
