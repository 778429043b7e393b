use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::domain::QaPair;

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate questions";
pub const NOT_CONFIGURED_MESSAGE: &str = "Service is not configured";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::ProviderError(_) => "PROVIDER_ERROR",
            AppError::ParseError(_) => "PARSE_ERROR",
        }
    }

    /// Message safe to hand back to the caller. Server-side failures carry
    /// details (provider payloads, parser positions) that stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::ConfigurationError(_) => NOT_CONFIGURED_MESSAGE.to_string(),
            AppError::ProviderError(_) | AppError::ParseError(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Error body. Mirrors the success shape so clients can always read `questions`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub questions: Vec<QaPair>,
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigurationError(_)
            | AppError::ProviderError(_)
            | AppError::ParseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            questions: Vec::new(),
            error: self.public_message(),
            code: status.as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| err.to_string());
        AppError::ValidationError(message)
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ProviderError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ConfigurationError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::ProviderError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::ParseError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::ValidationError("Topic is required".into());
        assert_eq!(err.to_string(), "Validation error: Topic is required");
        assert_eq!(err.public_message(), "Topic is required");
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = AppError::ParseError("expected `,` at line 3 column 9".into());
        assert_eq!(err.public_message(), GENERIC_FAILURE_MESSAGE);

        let err = AppError::ConfigurationError("MODEL_API_KEY is not set".into());
        assert_eq!(err.public_message(), NOT_CONFIGURED_MESSAGE);
    }

    #[actix_rt::test]
    async fn test_error_response_body_shape() {
        let resp = AppError::ProviderError("status 503".into()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["questions"], serde_json::json!([]));
        assert_eq!(json["error"], GENERIC_FAILURE_MESSAGE);
        assert_eq!(json["code"], 500);
    }
}
