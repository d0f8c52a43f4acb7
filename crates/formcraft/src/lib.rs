// Formcraft - schema-driven form builder core
// Form definition, assembly operations, document io and validation

pub mod builder;
pub mod document;
pub mod palette;
pub mod submission;

// Re-export the schema and value types
pub use formcraft_types::{
    FieldSchema, FieldType, FileHandle, FormConfig, FormSettings, FormValue, Limit,
    ValidationRules,
};

// Re-export the validation engine
pub use formcraft_validation::{
    field_error, validate_field, validate_form, SchemaError, ValidationError,
};

pub use builder::FormBuilder;
pub use submission::{submit, FormSubmission, SubmitOutcome};
