use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::GenerationOptions;

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Topic is required".into()));
    }
    Ok(())
}

/// Body of `POST /api/generate`.
///
/// Accepts both `{ "topic": ... }` and `{ "subject": ..., "includeCode": ... }`.
/// A missing topic deserializes to an empty string so it fails validation
/// instead of body extraction.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateRequest {
    #[serde(default, alias = "subject")]
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    #[serde(default, rename = "includeCode", alias = "include_code")]
    pub include_code: bool,
}

impl GenerateRequest {
    pub fn new(topic: impl Into<String>, include_code: bool) -> Self {
        Self {
            topic: topic.into(),
            include_code,
        }
    }

    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            include_code: self.include_code,
        }
    }
}

/// Form fields posted by the HTML page. Unchecked checkboxes are absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub topic: String,

    #[serde(default)]
    pub include_code: Option<String>,
}

impl From<GenerateForm> for GenerateRequest {
    fn from(form: GenerateForm) -> Self {
        GenerateRequest {
            topic: form.topic,
            include_code: form.include_code.is_some(),
        }
    }
}
