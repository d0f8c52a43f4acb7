//! Value emptiness normalization
//!
//! One shared rule runs before anything else: a value is empty when it is
//! missing entirely, an empty string, or a zero-length choice list. Type
//! rules never see an empty value.

use formcraft_types::FormValue;

/// True when the raw value should be treated as "not provided".
pub fn is_empty(value: Option<&FormValue>) -> bool {
    match value {
        None => true,
        Some(v) => v.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_types::FileHandle;

    #[test]
    fn test_missing_is_empty() {
        assert!(is_empty(None));
    }

    #[test]
    fn test_empty_shapes() {
        assert!(is_empty(Some(&FormValue::from(""))));
        assert!(is_empty(Some(&FormValue::Choices(vec![]))));
    }

    #[test]
    fn test_present_shapes() {
        assert!(!is_empty(Some(&FormValue::from("0"))));
        assert!(!is_empty(Some(&FormValue::Choices(vec!["A".to_string()]))));
        assert!(!is_empty(Some(&FormValue::File(FileHandle::new(
            "a.pdf",
            "application/pdf"
        )))));
    }
}
