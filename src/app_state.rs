use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_client::{ModelClient, OpenAiModelClient},
        prompt_builder::PromptBuilder,
        question_service::QuestionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the provider client once; it is shared read-only by every request.
    pub fn new(config: Config) -> Self {
        let client: Option<Arc<dyn ModelClient>> = match OpenAiModelClient::from_config(&config) {
            Some(client) => {
                log::info!(
                    "Model client ready: {} via {}",
                    client.model(),
                    config.model_api_base
                );
                Some(Arc::new(client))
            }
            None => {
                log::warn!(
                    "MODEL_API_KEY is not set; generate requests will fail until it is configured"
                );
                None
            }
        };

        Self::with_client(config, client)
    }

    pub fn with_client(config: Config, client: Option<Arc<dyn ModelClient>>) -> Self {
        let prompt_builder = PromptBuilder::new(config.response_format, config.question_count);
        let question_service = Arc::new(QuestionService::new(client, prompt_builder));

        Self {
            question_service,
            config: Arc::new(config),
        }
    }
}
