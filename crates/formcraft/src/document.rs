// File: src/document.rs
// Purpose: Form document import/export (JSON)

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use formcraft_types::FormConfig;

/// Serializes a form definition to the pretty-printed document format.
pub fn export_json(config: &FormConfig) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to serialize form definition")
}

/// Parses a form document. Unknown blocks (themes, layout hints from older
/// builder versions) are ignored.
pub fn import_json(document: &str) -> Result<FormConfig> {
    serde_json::from_str(document)
        .context("Error importing file. Please check the file format.")
}

/// Writes the form document at the given path.
pub fn save(config: &FormConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let document = export_json(config)?;

    fs::write(path, document)
        .with_context(|| format!("Failed to write form document: {:?}", path))?;

    tracing::debug!(path = %path.display(), "exported form document");
    Ok(())
}

/// Reads a form document from the given path.
pub fn load(path: impl AsRef<Path>) -> Result<FormConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form document: {:?}", path))?;

    import_json(&content)
}

/// Download-style file name for a form: whitespace runs collapse to
/// underscores and the document suffix is appended.
pub fn export_filename(title: &str) -> String {
    let name = title.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}.json", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_types::{FieldSchema, FieldType, FormSettings, ValidationRules};
    use pretty_assertions::assert_eq;

    fn sample_config() -> FormConfig {
        let mut email = FieldSchema::new("email-1", FieldType::Email, "Email");
        email.required = true;
        email.validation = Some(ValidationRules {
            email_message: Some("Please enter a valid email address".to_string()),
            ..Default::default()
        });

        FormConfig {
            id: "form-1".to_string(),
            title: "Contact Us".to_string(),
            description: Some("We read everything".to_string()),
            fields: vec![email],
            settings: FormSettings::default(),
        }
    }

    #[test]
    fn test_round_trip() {
        let config = sample_config();
        let document = export_json(&config).unwrap();
        let restored = import_json(&document).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_import_ignores_theme_block() {
        let document = r#"{
            "id": "form-1",
            "title": "Contact Us",
            "fields": [],
            "theme": { "id": "default", "colors": {} },
            "settings": { "submitText": "Send" }
        }"#;

        let config = import_json(document).unwrap();
        assert_eq!(config.settings.submit_text, "Send");
    }

    #[test]
    fn test_import_rejects_malformed_document() {
        let error = import_json("{ not json").unwrap_err();
        assert!(error.to_string().contains("Error importing file"));
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Contact Us"), "Contact_Us.json");
        assert_eq!(export_filename("  spaced   out  "), "spaced_out.json");
        assert_eq!(export_filename("plain"), "plain.json");
    }
}
