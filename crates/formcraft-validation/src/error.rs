// File: src/error.rs
// Purpose: Validation outcome and schema defect types

use serde::{Deserialize, Serialize};
use std::fmt;

/// One user-facing failure for one field.
///
/// At most one of these is produced per field per pass; the first failing
/// rule wins. The serialized shape matches the exported document convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field_id: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_id, self.message)
    }
}

/// A misconfigured field schema, distinct from bad user input.
///
/// Surfaced as a hard error so callers report it as an application defect
/// instead of showing it to the person filling in the form.
#[derive(Debug)]
pub enum SchemaError {
    /// `validation.pattern` failed to compile.
    InvalidPattern {
        field_id: String,
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::InvalidPattern {
                field_id, pattern, ..
            } => {
                write!(
                    f,
                    "invalid validation pattern {:?} on field '{}'",
                    pattern, field_id
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::InvalidPattern { source, .. } => Some(source),
        }
    }
}
