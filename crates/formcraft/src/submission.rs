// File: src/submission.rs
// Purpose: Submission records minted after a clean validation pass

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use formcraft_types::{FormConfig, FormValue};
use formcraft_validation::{validate_form, SchemaError, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One accepted submission of a form. Submissions are handed to the caller;
/// this crate does not store them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub id: String,
    pub form_id: String,
    pub data: HashMap<String, FormValue>,
    pub submitted_at: DateTime<Utc>,
}

impl FormSubmission {
    pub fn new(form_id: impl Into<String>, data: HashMap<String, FormValue>) -> Self {
        Self {
            id: format!("submission_{}", Uuid::new_v4()),
            form_id: form_id.into(),
            data,
            submitted_at: Utc::now(),
        }
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Accepted(FormSubmission),
    Rejected(Vec<ValidationError>),
}

/// Runs the validation pass over the whole form and mints a submission when
/// it comes back clean. Schema defects propagate; they are configuration
/// bugs, not submission failures.
pub fn submit(
    config: &FormConfig,
    data: HashMap<String, FormValue>,
) -> Result<SubmitOutcome, SchemaError> {
    let errors = validate_form(&config.fields, &data)?;

    if errors.is_empty() {
        tracing::debug!(form_id = %config.id, "submission accepted");
        Ok(SubmitOutcome::Accepted(FormSubmission::new(
            config.id.clone(),
            data,
        )))
    } else {
        Ok(SubmitOutcome::Rejected(errors))
    }
}
