//! Core data models for the translation gateway

use serde::{Deserialize, Serialize};

/// Translation request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(rename = "toLocale", skip_serializing_if = "Option::is_none")]
    pub to_locale: Option<String>,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            to_locale: None,
        }
    }

    pub fn with_to_locale(mut self, to_locale: impl Into<String>) -> Self {
        self.to_locale = Some(to_locale.into());
        self
    }
}

/// Successful translation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

impl TranslateResponse {
    pub fn new(translation: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
        }
    }
}

/// Error response body for provider and internal failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    /// Build an error body; an empty message renders as a single space
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            error: error.into(),
            message: if message.is_empty() {
                " ".to_string()
            } else {
                message
            },
        }
    }
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Provider-side translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub detected_source_lang: Option<String>,
}
