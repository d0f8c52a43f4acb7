// File: src/palette.rs
// Purpose: Stock field templates offered by the builder palette

use formcraft_types::{FieldSchema, FieldType, ValidationRules};

fn template(id: &str, field_type: FieldType, label: &str) -> FieldSchema {
    FieldSchema::new(id, field_type, label)
}

fn with_placeholder(mut field: FieldSchema, placeholder: &str) -> FieldSchema {
    field.placeholder = Some(placeholder.to_string());
    field
}

fn options() -> Vec<String> {
    vec![
        "Option 1".to_string(),
        "Option 2".to_string(),
        "Option 3".to_string(),
    ]
}

/// The stock palette, in display order. Template ids are placeholders; a
/// fresh id is assigned when a template is added to a form.
pub fn standard_fields() -> Vec<FieldSchema> {
    let mut fields = Vec::new();

    // Text fields
    let mut text = with_placeholder(
        template("text-field", FieldType::Text, "Text Input"),
        "Enter text...",
    );
    text.required = true;
    fields.push(text);

    let mut email = with_placeholder(
        template("email-field", FieldType::Email, "Email"),
        "Enter email...",
    );
    email.required = true;
    email.validation = Some(ValidationRules {
        email: Some(true),
        email_message: Some("Please enter a valid email address".to_string()),
        ..Default::default()
    });
    fields.push(email);

    fields.push(with_placeholder(
        template("password-field", FieldType::Password, "Password"),
        "Enter password...",
    ));

    fields.push(with_placeholder(
        template("number-field", FieldType::Number, "Number"),
        "Enter number...",
    ));

    let mut textarea = with_placeholder(
        template("textarea-field", FieldType::Textarea, "Text Area"),
        "Enter text...",
    );
    textarea.rows = Some(4);
    fields.push(textarea);

    // Selection fields
    let mut select = with_placeholder(
        template("select-field", FieldType::Select, "Select"),
        "Choose an option...",
    );
    select.options = Some(options());
    fields.push(select);

    let mut radio = template("radio-field", FieldType::Radio, "Radio Buttons");
    radio.options = Some(options());
    fields.push(radio);

    let mut checkbox = template("checkbox-field", FieldType::Checkbox, "Checkboxes");
    checkbox.options = Some(options());
    fields.push(checkbox);

    // Other fields
    fields.push(template("date-field", FieldType::Date, "Date"));

    let mut file = template("file-field", FieldType::File, "File Upload");
    file.accept = Some("*/*".to_string());
    fields.push(file);

    let mut image = template("image-field", FieldType::File, "Image Upload");
    image.accept = Some("image/*".to_string());
    fields.push(image);

    // Pattern presets
    let mut url = with_placeholder(
        template("url-field", FieldType::Text, "URL"),
        "https://example.com",
    );
    url.validation = Some(ValidationRules {
        pattern: Some("^https?://.+".to_string()),
        message: Some("Please enter a valid URL".to_string()),
        ..Default::default()
    });
    fields.push(url);

    let mut phone = with_placeholder(
        template("phone-field", FieldType::Text, "Phone Number"),
        "+91 9999999999",
    );
    phone.validation = Some(ValidationRules {
        pattern: Some(r"^[\+]?[1-9][\d\s\-\(\)]{7,}$".to_string()),
        message: Some("Please enter a valid phone number".to_string()),
        ..Default::default()
    });
    fields.push(phone);

    let mut zip = with_placeholder(
        template("zip-field", FieldType::Text, "ZIP Code"),
        "123456",
    );
    zip.validation = Some(ValidationRules {
        pattern: Some(r"^\d+$".to_string()),
        message: Some("Please enter a valid ZIP code (numbers only)".to_string()),
        ..Default::default()
    });
    fields.push(zip);

    fields
}
