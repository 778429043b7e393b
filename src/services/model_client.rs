use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::interview_prompt::{MAX_OUTPUT_TOKENS, SAMPLING_TEMPERATURE, SAMPLING_TOP_P},
    errors::{AppError, AppResult},
    models::domain::ResponseFormat,
};

/// Anything that turns a prompt into raw completion text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// `format` only hints the provider (e.g. JSON mode); parsing happens elsewhere.
    async fn complete(&self, prompt: &str, format: ResponseFormat) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormatSpec {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatSpec>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn new(model: &'a str, prompt: &'a str, format: ResponseFormat) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: SAMPLING_TEMPERATURE,
            top_p: SAMPLING_TOP_P,
            max_tokens: MAX_OUTPUT_TOKENS,
            response_format: match format {
                ResponseFormat::Json => Some(ResponseFormatSpec {
                    kind: "json_object",
                }),
                ResponseFormat::QaLines => None,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_text(self) -> AppResult<String> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ProviderError("no completion candidate returned".into()))?;

        if let Some(reason) = choice.finish_reason.as_deref() {
            if reason != "stop" {
                log::warn!("Completion finished with reason '{}'", reason);
            }
        }

        choice
            .message
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::ProviderError("completion candidate has no text".into()))
    }
}

/// Process-wide handle, built once at startup and shared read-only.
pub struct OpenAiModelClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiModelClient {
    pub fn new(api_key: &SecretString, api_base: &str, model: impl Into<String>) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base.trim_end_matches('/'));

        Self {
            client: Client::with_config(openai_config),
            model: model.into(),
        }
    }

    /// Returns `None` when no credential is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.model_api_key.as_ref()?;
        Some(Self::new(api_key, &config.model_api_base, config.model_name.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn complete(&self, prompt: &str, format: ResponseFormat) -> AppResult<String> {
        let request = ChatCompletionRequest::new(&self.model, prompt, format);

        log::debug!(
            "Requesting completion from model {} (prompt {} chars, format {})",
            self.model,
            prompt.len(),
            format
        );

        let response: ChatCompletionResponse = self
            .client
            .chat()
            .create_byot(request)
            .await?;

        response.into_text()
    }
}
