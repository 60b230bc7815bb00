//! Field-level validation of raw request bodies

use serde_json::Value;

use crate::core::models::{FieldError, TranslateRequest};

/// Message returned when `text` is missing, not a string, or empty
pub const TEXT_REQUIRED: &str = "Text to translate is required.";

/// Message returned when `toLocale` is present but not a string
pub const INVALID_TO_LOCALE: &str = "Invalid \"toLocale\" value. Expected string";

/// Validate a raw JSON request body.
///
/// A missing or null body behaves like an empty object. Only the empty
/// string is rejected for `text`; whitespace-only input passes.
pub fn validate_request(body: &Value) -> Result<TranslateRequest, Vec<FieldError>> {
    let mut errors = Vec::new();

    let text = match body.get("text") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => {
            errors.push(FieldError::new("text", TEXT_REQUIRED));
            None
        }
    };

    let to_locale = match body.get("toLocale") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new("toLocale", INVALID_TO_LOCALE));
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut request = TranslateRequest::new(text.unwrap_or_default());
    request.to_locale = to_locale;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_body() {
        let body = json!({"text": "Hello, how are you?", "toLocale": "es"});
        let request = validate_request(&body).unwrap();
        assert_eq!(request.text, "Hello, how are you?");
        assert_eq!(request.to_locale.as_deref(), Some("es"));
    }

    #[test]
    fn test_to_locale_absent() {
        let body = json!({"text": "Hello"});
        let request = validate_request(&body).unwrap();
        assert!(request.to_locale.is_none());
    }

    #[test]
    fn test_empty_text_rejected() {
        let body = json!({"text": "", "toLocale": "es"});
        let errors = validate_request(&body).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("text", TEXT_REQUIRED)]);
    }

    #[test]
    fn test_missing_text_rejected() {
        let body = json!({"toLocale": "es"});
        let errors = validate_request(&body).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("text", TEXT_REQUIRED)]);
    }

    #[test]
    fn test_non_string_text_rejected() {
        let body = json!({"text": 42});
        let errors = validate_request(&body).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("text", TEXT_REQUIRED)]);
    }

    #[test]
    fn test_whitespace_text_accepted() {
        let body = json!({"text": "   "});
        assert!(validate_request(&body).is_ok());
    }

    #[test]
    fn test_non_string_to_locale_rejected() {
        let body = json!({"text": "Hello", "toLocale": 7});
        let errors = validate_request(&body).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("toLocale", INVALID_TO_LOCALE)]);
    }

    #[test]
    fn test_null_to_locale_rejected() {
        let body = json!({"text": "Hello", "toLocale": null});
        let errors = validate_request(&body).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("toLocale", INVALID_TO_LOCALE)]);
    }

    #[test]
    fn test_null_body_rejected() {
        let errors = validate_request(&Value::Null).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("text", TEXT_REQUIRED)]);
    }

    #[test]
    fn test_both_fields_invalid() {
        let body = json!({"text": "", "toLocale": 7});
        let errors = validate_request(&body).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], FieldError::new("text", TEXT_REQUIRED));
        assert_eq!(errors[1], FieldError::new("toLocale", INVALID_TO_LOCALE));
    }
}
