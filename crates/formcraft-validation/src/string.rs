//! Text length and pattern rules

use formcraft_types::FieldSchema;
use regex::Regex;

use crate::error::SchemaError;
use crate::messages;

/// Length bounds and pattern matching for text, textarea and password
/// fields. `min`/`max` are character counts here.
///
/// The pattern is compiled fresh on every call; patterns are small and
/// validation runs far less often than UI interaction. A pattern that does
/// not compile is a schema defect, not a user input failure.
pub fn check_text(field: &FieldSchema, value: &str) -> Result<Option<String>, SchemaError> {
    let Some(rules) = field.rules() else {
        return Ok(None);
    };

    let length = value.chars().count();

    if let Some(min) = rules.min.as_ref().and_then(|l| l.as_length()) {
        if length < min {
            return Ok(Some(messages::resolve(
                field,
                format!("Text must be at least {} characters", min),
            )));
        }
    }

    if let Some(max) = rules.max.as_ref().and_then(|l| l.as_length()) {
        if length > max {
            return Ok(Some(messages::resolve(
                field,
                format!("Text must be at most {} characters", max),
            )));
        }
    }

    if let Some(pattern) = rules.pattern.as_deref() {
        let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            field_id: field.id.clone(),
            pattern: pattern.to_string(),
            source,
        })?;
        if !regex.is_match(value) {
            return Ok(Some(messages::resolve(
                field,
                "Please enter a valid format".to_string(),
            )));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_types::{FieldType, ValidationRules};

    fn text_field(rules: ValidationRules) -> FieldSchema {
        let mut field = FieldSchema::new("f1", FieldType::Text, "Text");
        field.validation = Some(rules);
        field
    }

    #[test]
    fn test_no_rules_passes() {
        let field = FieldSchema::new("f1", FieldType::Text, "Text");
        assert_eq!(check_text(&field, "anything").unwrap(), None);
    }

    #[test]
    fn test_min_length() {
        let field = text_field(ValidationRules {
            min: Some(3.into()),
            ..Default::default()
        });
        assert_eq!(
            check_text(&field, "ab").unwrap(),
            Some("Text must be at least 3 characters".to_string())
        );
        assert_eq!(check_text(&field, "abc").unwrap(), None);
    }

    #[test]
    fn test_max_length() {
        let field = text_field(ValidationRules {
            max: Some(5.into()),
            ..Default::default()
        });
        assert_eq!(
            check_text(&field, "toolong").unwrap(),
            Some("Text must be at most 5 characters".to_string())
        );
        assert_eq!(check_text(&field, "short").unwrap(), None);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let field = text_field(ValidationRules {
            max: Some(4.into()),
            ..Default::default()
        });
        // Four characters, more than four bytes
        assert_eq!(check_text(&field, "äöüß").unwrap(), None);
    }

    #[test]
    fn test_pattern_mismatch() {
        let field = text_field(ValidationRules {
            pattern: Some(r"^\d+$".to_string()),
            ..Default::default()
        });
        assert_eq!(
            check_text(&field, "12a").unwrap(),
            Some("Please enter a valid format".to_string())
        );
        assert_eq!(check_text(&field, "123").unwrap(), None);
    }

    #[test]
    fn test_pattern_message_override() {
        let field = text_field(ValidationRules {
            pattern: Some(r"^\d+$".to_string()),
            message: Some("Digits only".to_string()),
            ..Default::default()
        });
        assert_eq!(
            check_text(&field, "nope").unwrap(),
            Some("Digits only".to_string())
        );
    }

    #[test]
    fn test_invalid_pattern_is_schema_error() {
        let field = text_field(ValidationRules {
            pattern: Some("[unclosed".to_string()),
            ..Default::default()
        });
        let error = check_text(&field, "value").unwrap_err();
        match error {
            SchemaError::InvalidPattern { field_id, .. } => assert_eq!(field_id, "f1"),
        }
    }
}
