// File: src/field.rs
// Purpose: Field schema, field kinds and the validation constraint bag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of field kinds supported by the builder.
///
/// Behavior branches on this tag everywhere in the engine, so the set is a
/// proper enum rather than a string: adding a kind forces every dispatch
/// site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Number,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    File,
}

impl FieldType {
    /// All field kinds, in palette display order.
    pub const ALL: [FieldType; 10] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Password,
        FieldType::Number,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Date,
        FieldType::File,
    ];

    /// Field kinds that carry an `options` choice list.
    pub fn has_options(self) -> bool {
        matches!(
            self,
            FieldType::Select | FieldType::Checkbox | FieldType::Radio
        )
    }

    /// Field kinds validated as free-form text (length and pattern rules).
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            FieldType::Text | FieldType::Textarea | FieldType::Password
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Date => "date",
            FieldType::File => "file",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `min`/`max` bound from the constraint bag.
///
/// The same two document keys are overloaded per field kind: character count
/// for text fields, numeric bound for number fields, and a parseable date
/// string (or epoch milliseconds) for date fields. The engine picks the
/// interpretation from the field type; this type only preserves what the
/// document said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Limit {
    Number(f64),
    Text(String),
}

impl Limit {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Limit::Number(n) => Some(*n),
            Limit::Text(s) => s.trim().parse().ok(),
        }
    }

    /// The bound read as a character count. Negative or non-numeric bounds
    /// yield no length constraint.
    pub fn as_length(&self) -> Option<usize> {
        self.as_f64().filter(|n| *n >= 0.0).map(|n| n as usize)
    }
}

impl From<f64> for Limit {
    fn from(n: f64) -> Self {
        Limit::Number(n)
    }
}

impl From<i32> for Limit {
    fn from(n: i32) -> Self {
        Limit::Number(n as f64)
    }
}

impl From<&str> for Limit {
    fn from(s: &str) -> Self {
        Limit::Text(s.to_string())
    }
}

impl From<String> for Limit {
    fn from(s: String) -> Self {
        Limit::Text(s)
    }
}

/// Optional constraint bag attached to a field.
///
/// Key names follow the exported document's camelCase convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Limit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Limit>,

    /// Regex the whole value must satisfy, compiled at validation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Overrides every default failure message for the field except the
    /// email format message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// `Some(false)` disables the email format check; required-ness still
    /// applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,

    /// Overrides the email format failure message only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
}

/// Declarative description of one form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Stable identifier, unique within one form, assigned at creation time.
    pub id: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Display name, used in default error messages.
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,

    /// Choice set for select, radio and checkbox fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Allows multiple selections for select and checkbox fields. A checkbox
    /// group without it acts as a single-choice group.
    #[serde(default)]
    pub multiple: bool,

    /// Display rows for textarea fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,

    /// Comma-separated accepted extension/MIME patterns for file fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
}

impl FieldSchema {
    pub fn new(
        id: impl Into<String>,
        field_type: FieldType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: label.into(),
            placeholder: None,
            required: false,
            validation: None,
            options: None,
            multiple: false,
            rows: None,
            accept: None,
        }
    }

    pub fn rules(&self) -> Option<&ValidationRules> {
        self.validation.as_ref()
    }

    /// The field-wide message override, if configured.
    pub fn custom_message(&self) -> Option<&str> {
        self.validation.as_ref().and_then(|v| v.message.as_deref())
    }
}
