//! Required-field resolution

use formcraft_types::{FieldSchema, FormValue};

use crate::messages;
use crate::normalize;

/// Checks the required flag against the shared emptiness rule.
///
/// Runs before any type-specific rule; a failure here short-circuits the
/// rest of the field's checks. Radio groups report an unset choice as an
/// empty string and selects as an empty string or an empty list, all of
/// which the emptiness rule already treats as absent.
pub fn check_required(field: &FieldSchema, value: Option<&FormValue>) -> Option<String> {
    if !field.required {
        return None;
    }

    if normalize::is_empty(value) {
        return Some(messages::resolve(
            field,
            format!("{} is required", field.label),
        ));
    }

    None
}
