use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Response language selected by the client. Unrecognized codes are not an
/// error; anything that is not exactly "id" resolves to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Indonesian,
}

impl Language {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("id") => Self::Indonesian,
            _ => Self::English,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    // Absent message deserializes as "" so validation, not a body
    // rejection, produces the error response.
    #[serde(default)]
    #[validate(custom(function = non_blank))]
    pub message: String,

    pub language: Option<String>,
}

impl ChatRequest {
    pub fn language(&self) -> Language {
        Language::from_code(self.language.as_deref())
    }
}

fn non_blank(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        return Err(ValidationError::new("message_required"));
    }
    Ok(())
}
