// File: src/value.rs
// Purpose: Runtime value shapes held for form fields

use serde::{Deserialize, Serialize};

/// Handle to a user-chosen file: the name and the reported MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,

    /// Reported MIME type, e.g. "image/png". May be empty when the source
    /// could not determine one.
    #[serde(rename = "type", default)]
    pub mime: String,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
        }
    }

    /// Lowercased extension including the leading dot, if the name has one.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| format!(".{}", ext.to_lowercase()))
    }
}

/// The value held for one field; the shape depends on the field kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Scalar entry: text, email, password, number-as-typed, date, radio
    /// choice, single select choice.
    Text(String),
    /// Checked boxes or multi-select choices, in selection order.
    Choices(Vec<String>),
    /// The chosen file for a file field.
    File(FileHandle),
}

impl FormValue {
    /// Shared emptiness rule: an empty string or a zero-length choice list
    /// counts as "not provided". A present file handle never does.
    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Text(s) => s.is_empty(),
            FormValue::Choices(items) => items.is_empty(),
            FormValue::File(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            FormValue::Choices(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileHandle> {
        match self {
            FormValue::File(file) => Some(file),
            _ => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(items: Vec<String>) -> Self {
        FormValue::Choices(items)
    }
}

impl From<FileHandle> for FormValue {
    fn from(file: FileHandle) -> Self {
        FormValue::File(file)
    }
}
