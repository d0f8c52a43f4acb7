//! Email format rule

use formcraft_types::FieldSchema;
use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately permissive: one '@', no whitespace, dotted domain. Stricter
// checks reject too many real addresses.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Format check for email fields.
///
/// `validation.email = false` disables the format check entirely, leaving
/// only required-ness in force. `emailMessage` overrides the format failure
/// message; the field-wide `message` does not apply here.
pub fn check_email(field: &FieldSchema, value: &str) -> Option<String> {
    let rules = field.rules();

    if rules.and_then(|r| r.email) == Some(false) {
        return None;
    }

    if EMAIL_REGEX.is_match(value) {
        return None;
    }

    Some(
        rules
            .and_then(|r| r.email_message.clone())
            .unwrap_or_else(|| "Please enter a valid email address".to_string()),
    )
}
