//! Formcraft schema and document types
//!
//! The serde shapes here double as the on-disk form document format: a form
//! exported by the builder deserializes back through these types without any
//! transformation, and unknown keys from older documents are ignored.

pub mod config;
pub mod field;
pub mod value;

pub use config::{FormConfig, FormSettings};
pub use field::{FieldSchema, FieldType, Limit, ValidationRules};
pub use value::{FileHandle, FormValue};
