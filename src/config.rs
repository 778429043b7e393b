use std::env;

use secrecy::SecretString;

use crate::models::domain::ResponseFormat;

pub const DEFAULT_MODEL_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.0-flash";
pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const MAX_QUESTION_COUNT: usize = 20;
pub const DEFAULT_WEB_SERVER_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    /// Provider bearer credential. `None` keeps the server up but fails every
    /// generate request with a configuration error.
    pub model_api_key: Option<SecretString>,
    pub model_api_base: String,
    pub model_name: String,
    pub response_format: ResponseFormat,
    pub question_count: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
}

/// First non-blank key among `MODEL_API_KEY`, `GOOGLE_API_KEY`, `GEMINI_API_KEY`.
fn first_api_key<I, S>(candidates: I) -> Option<SecretString>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|key| key.as_ref().trim().to_string())
        .find(|key| !key.is_empty())
        .map(SecretString::from)
}

fn parse_response_format(value: Option<&str>) -> ResponseFormat {
    match value.map(str::parse::<ResponseFormat>) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            log::warn!("Ignoring RESPONSE_FORMAT: {}", e);
            ResponseFormat::default()
        }
        None => ResponseFormat::default(),
    }
}

fn parse_question_count(value: Option<&str>) -> usize {
    match value.map(|v| v.trim().parse::<usize>()) {
        Some(Ok(count)) => {
            let clamped = count.clamp(1, MAX_QUESTION_COUNT);
            if clamped != count {
                log::warn!(
                    "QUESTION_COUNT {} is outside 1..={}, using {}",
                    count,
                    MAX_QUESTION_COUNT,
                    clamped
                );
            }
            clamped
        }
        Some(Err(e)) => {
            log::warn!(
                "Ignoring QUESTION_COUNT: {}, using {}",
                e,
                DEFAULT_QUESTION_COUNT
            );
            DEFAULT_QUESTION_COUNT
        }
        None => DEFAULT_QUESTION_COUNT,
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    match value.map(|v| v.trim().parse::<u16>()) {
        Some(Ok(port)) => port,
        Some(Err(e)) => {
            log::warn!("Ignoring WEB_SERVER_PORT: {}, using {}", e, DEFAULT_WEB_SERVER_PORT);
            DEFAULT_WEB_SERVER_PORT
        }
        None => DEFAULT_WEB_SERVER_PORT,
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            model_api_key: first_api_key(
                ["MODEL_API_KEY", "GOOGLE_API_KEY", "GEMINI_API_KEY"].map(|name| env::var(name).ok()),
            ),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_MODEL_API_BASE.to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
            response_format: parse_response_format(env::var("RESPONSE_FORMAT").ok().as_deref()),
            question_count: parse_question_count(env::var("QUESTION_COUNT").ok().as_deref()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_port(env::var("WEB_SERVER_PORT").ok().as_deref()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        }
    }

    pub fn has_model_credentials(&self) -> bool {
        self.model_api_key.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            model_api_key: Some(SecretString::from("test-api-key".to_string())),
            model_api_base: "http://127.0.0.1:9/v1".to_string(),
            model_name: "test-model".to_string(),
            response_format: ResponseFormat::Json,
            question_count: DEFAULT_QUESTION_COUNT,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: DEFAULT_WEB_SERVER_PORT,
            cors_allowed_origin: None,
        }
    }
}
