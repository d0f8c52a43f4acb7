//! Choice-group cardinality rule

use formcraft_types::{FieldSchema, FieldType, FormValue};

use crate::messages;

/// A checkbox group without `multiple` acts as a single-choice group, so
/// more than one checked box is rejected. Option-set membership is not
/// enforced for any choice field.
pub fn check_choices(field: &FieldSchema, value: &FormValue) -> Option<String> {
    if field.field_type != FieldType::Checkbox || field.multiple {
        return None;
    }

    let checked = value.as_choices().map(|c| c.len()).unwrap_or(0);
    if checked > 1 {
        return Some(messages::resolve(
            field,
            "Please select only one option".to_string(),
        ));
    }

    None
}
