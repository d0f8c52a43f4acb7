//! Numeric range rules

use formcraft_types::FieldSchema;

use crate::messages;

/// Parses the entry as a number and applies `min`/`max` bounds.
///
/// Number fields hold the value as typed, so parsing happens here. Bounds
/// may be fractional.
pub fn check_number(field: &FieldSchema, value: &str) -> Option<String> {
    let parsed = value.trim().parse::<f64>().ok().filter(|n| !n.is_nan());

    let Some(number) = parsed else {
        return Some(messages::resolve(
            field,
            "Please enter a valid number".to_string(),
        ));
    };

    let rules = field.rules();

    if let Some(min) = rules.and_then(|r| r.min.as_ref()).and_then(|l| l.as_f64()) {
        if number < min {
            return Some(messages::resolve(
                field,
                format!("Value must be at least {}", min),
            ));
        }
    }

    if let Some(max) = rules.and_then(|r| r.max.as_ref()).and_then(|l| l.as_f64()) {
        if number > max {
            return Some(messages::resolve(
                field,
                format!("Value must be at most {}", max),
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_types::{FieldType, ValidationRules};

    fn number_field(rules: Option<ValidationRules>) -> FieldSchema {
        let mut field = FieldSchema::new("f1", FieldType::Number, "Amount");
        field.validation = rules;
        field
    }

    #[test]
    fn test_unparseable_entry() {
        let field = number_field(None);
        assert_eq!(
            check_number(&field, "twelve"),
            Some("Please enter a valid number".to_string())
        );
    }

    #[test]
    fn test_plain_numbers_pass() {
        let field = number_field(None);
        assert_eq!(check_number(&field, "42"), None);
        assert_eq!(check_number(&field, " -3.5 "), None);
    }

    #[test]
    fn test_bounds() {
        let field = number_field(Some(ValidationRules {
            min: Some(1.into()),
            max: Some(10.into()),
            ..Default::default()
        }));
        assert_eq!(
            check_number(&field, "0"),
            Some("Value must be at least 1".to_string())
        );
        assert_eq!(
            check_number(&field, "15"),
            Some("Value must be at most 10".to_string())
        );
        assert_eq!(check_number(&field, "10"), None);
    }

    #[test]
    fn test_fractional_bounds() {
        let field = number_field(Some(ValidationRules {
            min: Some(0.5.into()),
            ..Default::default()
        }));
        assert_eq!(
            check_number(&field, "0.25"),
            Some("Value must be at least 0.5".to_string())
        );
        assert_eq!(check_number(&field, "0.75"), None);
    }
}
