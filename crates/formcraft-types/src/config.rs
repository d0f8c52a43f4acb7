// File: src/config.rs
// Purpose: Top-level form document types

use serde::{Deserialize, Serialize};

use crate::field::FieldSchema;

/// A complete form definition. This struct is the root of the import/export
/// document; documents from older builder versions may carry extra blocks
/// (themes, layout hints) which are ignored on import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Field order is significant: validation errors come back in this
    /// order.
    #[serde(default)]
    pub fields: Vec<FieldSchema>,

    #[serde(default)]
    pub settings: FormSettings,
}

/// Presentation-independent form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSettings {
    pub submit_text: String,
    pub show_progress: bool,
    pub allow_multiple_submissions: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            submit_text: "Submit".to_string(),
            show_progress: false,
            allow_multiple_submissions: true,
        }
    }
}
