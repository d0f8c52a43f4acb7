//! File accept-list rule

use formcraft_types::{FieldSchema, FileHandle};

use crate::messages;

/// Matches a chosen file against the field's accept list.
///
/// Accept entries are either ".ext" extensions, compared case-insensitively
/// against the file name's extension, or MIME patterns ("image/png",
/// "image/*") which match by equality or prefix. An unset or "*/*" accept
/// list admits everything.
pub fn check_file(field: &FieldSchema, file: &FileHandle) -> Option<String> {
    let Some(accept) = field.accept.as_deref() else {
        return None;
    };
    let accept = accept.trim();
    if accept.is_empty() || accept == "*/*" {
        return None;
    }

    let extension = file.extension();
    let mime = file.mime.to_lowercase();

    let accepted = accept.split(',').map(str::trim).any(|entry| {
        let entry = entry.to_lowercase();
        if entry.starts_with('.') {
            extension.as_deref() == Some(entry.as_str())
        } else if entry.contains('/') {
            let prefix = entry.replace('*', "");
            mime == entry || mime.starts_with(&prefix)
        } else {
            false
        }
    });

    if accepted {
        None
    } else {
        Some(messages::resolve(
            field,
            format!("File type not accepted. Accepted types: {}", accept),
        ))
    }
}
