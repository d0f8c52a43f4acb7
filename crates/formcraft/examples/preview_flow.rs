// Example: Assemble a form, validate user entries and submit
// Mirrors the builder's edit -> preview -> submit flow end to end

use std::collections::HashMap;

use formcraft::{
    field_error, palette, submit, validate_form, FormBuilder, FormValue, SubmitOutcome,
    ValidationRules,
};

fn main() -> anyhow::Result<()> {
    // Assemble a signup form from palette templates
    let templates = palette::standard_fields();
    let email_template = templates
        .iter()
        .find(|f| f.id == "email-field")
        .cloned()
        .expect("palette has an email template");
    let number_template = templates
        .iter()
        .find(|f| f.id == "number-field")
        .cloned()
        .expect("palette has a number template");

    let mut builder = FormBuilder::new("Conference Signup");
    builder.set_description("Tell us who is coming.");

    let email_id = builder.add_field(email_template, None);
    let age_id = builder.add_field(number_template, None);
    builder.update_field(&age_id, |field| {
        field.label = "Age".to_string();
        field.required = true;
        field.validation = Some(ValidationRules {
            min: Some(18.into()),
            max: Some(120.into()),
            ..Default::default()
        });
    });

    let config = builder.into_config();

    // First attempt: bad address, out-of-range age
    let mut entries = HashMap::new();
    entries.insert(email_id.clone(), FormValue::from("not-an-address"));
    entries.insert(age_id.clone(), FormValue::from("12"));

    let errors = validate_form(&config.fields, &entries)?;
    println!("first attempt: {} error(s)", errors.len());
    for error in &errors {
        println!("  {}: {}", error.field_id, error.message);
    }

    // Fix the entries field by field, the way live validation would
    entries.insert(email_id.clone(), FormValue::from("ada@example.com"));
    entries.insert(age_id.clone(), FormValue::from("36"));
    let errors = validate_form(&config.fields, &entries)?;
    assert!(field_error(&email_id, &errors).is_none());

    // Clean pass mints a submission
    match submit(&config, entries)? {
        SubmitOutcome::Accepted(submission) => {
            println!("accepted: {} at {}", submission.id, submission.submitted_at)
        }
        SubmitOutcome::Rejected(errors) => println!("still rejected: {:?}", errors),
    }

    Ok(())
}
