//! Formcraft validation engine
//!
//! Pure, schema-driven validation: a field schema plus the raw submitted
//! values go in, an ordered list of user-facing errors comes out. The engine
//! keeps no state between calls, so it is safe to run on every change as
//! well as on submit.
//!
//! Rule order per field is fixed: required check first (short-circuits),
//! then the type-specific rule. At most one error is reported per field.

pub mod choice;
pub mod date;
pub mod email;
pub mod engine;
pub mod error;
pub mod file;
mod messages;
pub mod normalize;
pub mod numeric;
pub mod required;
pub mod string;

pub use engine::{field_error, validate_field, validate_form};
pub use error::{SchemaError, ValidationError};
