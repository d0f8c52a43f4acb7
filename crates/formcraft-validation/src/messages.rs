// File: src/messages.rs
// Purpose: Field-level message override resolution

use formcraft_types::FieldSchema;

/// The default message, unless the field configures `validation.message`.
///
/// The email format message is the one exception: it has its own override
/// key and is resolved in the email rule.
pub(crate) fn resolve(field: &FieldSchema, default: String) -> String {
    field
        .custom_message()
        .map(str::to_string)
        .unwrap_or(default)
}
