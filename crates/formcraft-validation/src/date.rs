//! Date parsing and range rules

use chrono::{DateTime, NaiveDate, Utc};
use formcraft_types::{FieldSchema, Limit};

use crate::messages;

/// Parses the lenient date shapes the form UI produces: ISO dates
/// ("2024-01-31"), full RFC 3339 timestamps, and the US-style "1/31/2024"
/// form shown back to users in error messages.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    NaiveDate::parse_from_str(value, "%m/%d/%Y").ok()
}

// A numeric bound is epoch milliseconds, matching how the exported document
// may carry dates produced from timestamps.
fn bound_date(limit: &Limit) -> Option<NaiveDate> {
    match limit {
        Limit::Text(s) => parse_date(s),
        Limit::Number(ms) => {
            DateTime::<Utc>::from_timestamp_millis(*ms as i64).map(|ts| ts.date_naive())
        }
    }
}

// Bounds are echoed without zero padding, e.g. "1/1/2024".
fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Parse check plus `min`/`max` date bounds for date fields.
pub fn check_date(field: &FieldSchema, value: &str) -> Option<String> {
    let Some(date) = parse_date(value) else {
        return Some(messages::resolve(
            field,
            "Please enter a valid date".to_string(),
        ));
    };

    let rules = field.rules();

    if let Some(min) = rules.and_then(|r| r.min.as_ref()).and_then(bound_date) {
        if date < min {
            return Some(messages::resolve(
                field,
                format!("Date must be after {}", display_date(min)),
            ));
        }
    }

    if let Some(max) = rules.and_then(|r| r.max.as_ref()).and_then(bound_date) {
        if date > max {
            return Some(messages::resolve(
                field,
                format!("Date must be before {}", display_date(max)),
            ));
        }
    }

    None
}
