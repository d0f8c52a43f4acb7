// File: src/engine.rs
// Purpose: Rule ordering and whole-form validation

use std::collections::HashMap;

use formcraft_types::{FieldSchema, FieldType, FormValue};

use crate::error::{SchemaError, ValidationError};
use crate::{choice, date, email, file, normalize, numeric, required, string};

/// Validates one field: required check first, then the type rule.
///
/// A required failure short-circuits the field, and type rules never see an
/// empty value, so an optional field left blank always passes no matter
/// what constraints it carries.
pub fn validate_field(
    field: &FieldSchema,
    value: Option<&FormValue>,
) -> Result<Option<String>, SchemaError> {
    if let Some(message) = required::check_required(field, value) {
        return Ok(Some(message));
    }

    if normalize::is_empty(value) {
        return Ok(None);
    }

    let Some(value) = value else {
        return Ok(None);
    };
    type_rule(field, value)
}

// One rule per field kind. A value whose shape does not match the field
// kind passes the type rule; required-ness has already been applied.
fn type_rule(field: &FieldSchema, value: &FormValue) -> Result<Option<String>, SchemaError> {
    match field.field_type {
        FieldType::Text | FieldType::Textarea | FieldType::Password => {
            match value.as_text() {
                Some(text) => string::check_text(field, text),
                None => Ok(None),
            }
        }
        FieldType::Email => Ok(value.as_text().and_then(|text| email::check_email(field, text))),
        FieldType::Number => Ok(value
            .as_text()
            .and_then(|text| numeric::check_number(field, text))),
        FieldType::Date => Ok(value.as_text().and_then(|text| date::check_date(field, text))),
        FieldType::File => Ok(value.as_file().and_then(|f| file::check_file(field, f))),
        FieldType::Checkbox => Ok(choice::check_choices(field, value)),
        FieldType::Select | FieldType::Radio => Ok(None),
    }
}

/// Validates every field, in order, against the submitted data.
///
/// Returns at most one error per field, in field order, so the UI can jump
/// to the first failure. Pure: neither input is touched and nothing is kept
/// between calls. A [`SchemaError`] means the form definition itself is
/// broken and should be reported as an application defect, not shown to the
/// person filling in the form.
pub fn validate_form(
    fields: &[FieldSchema],
    data: &HashMap<String, FormValue>,
) -> Result<Vec<ValidationError>, SchemaError> {
    let mut errors = Vec::new();

    for field in fields {
        if let Some(message) = validate_field(field, data.get(&field.id))? {
            errors.push(ValidationError::new(field.id.as_str(), message));
        }
    }

    tracing::debug!(
        fields = fields.len(),
        errors = errors.len(),
        "validated form"
    );

    Ok(errors)
}

/// The error recorded for a field, if any.
pub fn field_error<'a>(field_id: &str, errors: &'a [ValidationError]) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field_id == field_id)
        .map(|e| e.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_passes_type_rule() {
        let field = FieldSchema::new("f1", FieldType::Number, "Amount");
        let value = FormValue::Choices(vec!["5".to_string()]);
        assert_eq!(validate_field(&field, Some(&value)).unwrap(), None);
    }

    #[test]
    fn test_field_error_lookup() {
        let errors = vec![
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ];
        assert_eq!(field_error("b", &errors), Some("second"));
        assert_eq!(field_error("c", &errors), None);
    }
}
