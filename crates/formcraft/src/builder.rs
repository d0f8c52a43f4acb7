// File: src/builder.rs
// Purpose: Form assembly operations (add, remove, update, reorder)

use formcraft_types::{FieldSchema, FormConfig, FormSettings};
use uuid::Uuid;

/// Mutating wrapper around a [`FormConfig`] used while a form is being
/// assembled. Fields receive a fresh id when added; id and type never
/// change after that.
#[derive(Debug, Clone)]
pub struct FormBuilder {
    config: FormConfig,
}

impl FormBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            config: FormConfig {
                id: Uuid::new_v4().to_string(),
                title: title.into(),
                description: None,
                fields: Vec::new(),
                settings: FormSettings::default(),
            },
        }
    }

    /// Resumes editing an existing form definition.
    pub fn from_config(config: FormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn into_config(self) -> FormConfig {
        self.config
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.config.description = Some(description.into());
    }

    /// Adds a field to the form, assigning it a fresh id (the template's id
    /// is a palette placeholder). Inserts at `index` when given and in
    /// range, otherwise appends. Returns the assigned id.
    pub fn add_field(&mut self, template: FieldSchema, index: Option<usize>) -> String {
        let mut field = template;
        field.id = Uuid::new_v4().to_string();
        let id = field.id.clone();

        match index {
            Some(index) if index < self.config.fields.len() => {
                self.config.fields.insert(index, field)
            }
            _ => self.config.fields.push(field),
        }

        tracing::debug!(field_id = %id, fields = self.config.fields.len(), "field added");
        id
    }

    /// Removes a field by id. Returns false when no field matches.
    pub fn remove_field(&mut self, field_id: &str) -> bool {
        let before = self.config.fields.len();
        self.config.fields.retain(|f| f.id != field_id);
        self.config.fields.len() != before
    }

    /// Applies an edit to the field with the given id. The field's id and
    /// type are restored afterwards: both are fixed at creation time.
    pub fn update_field(&mut self, field_id: &str, edit: impl FnOnce(&mut FieldSchema)) -> bool {
        let Some(field) = self.config.fields.iter_mut().find(|f| f.id == field_id) else {
            return false;
        };

        let id = field.id.clone();
        let field_type = field.field_type;
        edit(field);
        field.id = id;
        field.field_type = field_type;
        true
    }

    /// Moves the field at `from` so that it ends up at `to`, shifting the
    /// fields in between. Returns false when either index is out of range.
    pub fn reorder_fields(&mut self, from: usize, to: usize) -> bool {
        let len = self.config.fields.len();
        if from >= len || to >= len {
            return false;
        }

        let field = self.config.fields.remove(from);
        self.config.fields.insert(to, field);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_types::FieldType;

    fn template(label: &str) -> FieldSchema {
        FieldSchema::new("palette-placeholder", FieldType::Text, label)
    }

    #[test]
    fn test_add_assigns_fresh_id() {
        let mut builder = FormBuilder::new("Survey");
        let first = builder.add_field(template("One"), None);
        let second = builder.add_field(template("Two"), None);

        assert_ne!(first, "palette-placeholder");
        assert_ne!(first, second);
        assert_eq!(builder.config().fields.len(), 2);
    }

    #[test]
    fn test_add_at_index() {
        let mut builder = FormBuilder::new("Survey");
        builder.add_field(template("One"), None);
        builder.add_field(template("Three"), None);
        builder.add_field(template("Two"), Some(1));

        let labels: Vec<&str> = builder
            .config()
            .fields
            .iter()
            .map(|f| f.label.as_str())
            .collect();
        assert_eq!(labels, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_add_out_of_range_appends() {
        let mut builder = FormBuilder::new("Survey");
        builder.add_field(template("One"), None);
        builder.add_field(template("Two"), Some(99));
        assert_eq!(builder.config().fields[1].label, "Two");
    }

    #[test]
    fn test_remove() {
        let mut builder = FormBuilder::new("Survey");
        let id = builder.add_field(template("One"), None);

        assert!(builder.remove_field(&id));
        assert!(!builder.remove_field(&id));
        assert!(builder.config().fields.is_empty());
    }

    #[test]
    fn test_update_preserves_id_and_type() {
        let mut builder = FormBuilder::new("Survey");
        let id = builder.add_field(template("One"), None);

        let updated = builder.update_field(&id, |field| {
            field.label = "Renamed".to_string();
            field.required = true;
            // Attempted id/type edits must not stick
            field.id = "hijacked".to_string();
            field.field_type = FieldType::File;
        });

        assert!(updated);
        let field = &builder.config().fields[0];
        assert_eq!(field.label, "Renamed");
        assert!(field.required);
        assert_eq!(field.id, id);
        assert_eq!(field.field_type, FieldType::Text);
    }

    #[test]
    fn test_reorder_splice_semantics() {
        let mut builder = FormBuilder::new("Survey");
        builder.add_field(template("A"), None);
        builder.add_field(template("B"), None);
        builder.add_field(template("C"), None);

        assert!(builder.reorder_fields(0, 2));
        let labels: Vec<&str> = builder
            .config()
            .fields
            .iter()
            .map(|f| f.label.as_str())
            .collect();
        assert_eq!(labels, vec!["B", "C", "A"]);

        assert!(!builder.reorder_fields(0, 3));
    }
}
