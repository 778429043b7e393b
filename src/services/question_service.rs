use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::QaPair, dto::GenerateRequest},
    services::{model_client::ModelClient, prompt_builder::PromptBuilder, response_parser},
};

/// validate → build prompt → one completion call → parse.
pub struct QuestionService {
    client: Option<Arc<dyn ModelClient>>,
    prompt_builder: PromptBuilder,
}

impl QuestionService {
    pub fn new(client: Option<Arc<dyn ModelClient>>, prompt_builder: PromptBuilder) -> Self {
        Self {
            client,
            prompt_builder,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub async fn generate(
        &self,
        request: &GenerateRequest,
        request_id: Option<&str>,
    ) -> AppResult<Vec<QaPair>> {
        let request_id = request_id.unwrap_or("-");
        request.validate().map_err(|e| {
            let err = AppError::from(e);
            log::warn!("[{}] Rejected request: {}", request_id, err);
            err
        })?;

        let client = self.client.as_ref().ok_or_else(|| {
            log::error!("[{}] Model API key is not configured", request_id);
            AppError::ConfigurationError("model API key is not configured".into())
        })?;

        let format = self.prompt_builder.format();
        let prompt = self
            .prompt_builder
            .build(&request.topic, request.options());
        log::info!(
            "[{}] Generating questions for topic '{}' (format {}, include_code {}, prompt {} chars)",
            request_id,
            request.topic.trim(),
            format,
            request.include_code,
            prompt.len()
        );

        let completion = client.complete(&prompt, format).await.map_err(|e| {
            log::error!("[{}] Completion failed: {}", request_id, e);
            e
        })?;
        log::debug!("[{}] Raw completion:\n{}", request_id, completion);

        let questions = response_parser::parse(&completion, format).map_err(|e| {
            log::error!(
                "[{}] Could not parse {} char completion: {}",
                request_id,
                completion.len(),
                e
            );
            e
        })?;

        if questions.is_empty() {
            log::error!("[{}] Completion contained no questions", request_id);
            return Err(AppError::ParseError("completion contained no questions".into()));
        }

        log::info!("[{}] Parsed {} questions", request_id, questions.len());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::ResponseFormat,
        services::model_client::MockModelClient,
        test_utils::fixtures,
    };

    fn service_with(mock: MockModelClient, format: ResponseFormat) -> QuestionService {
        QuestionService::new(Some(Arc::new(mock)), PromptBuilder::new(format, 5))
    }

    #[actix_rt::test]
    async fn blank_topic_never_calls_model() {
        let mut mock = MockModelClient::new();
        mock.expect_complete().times(0);
        let service = service_with(mock, ResponseFormat::Json);

        for topic in ["", "   ", "\n\t"] {
            let result = service
                .generate(&GenerateRequest::new(topic, false), None)
                .await;
            assert!(matches!(result, Err(AppError::ValidationError(_))));
        }
    }

    #[actix_rt::test]
    async fn blank_topic_is_rejected_before_configuration_check() {
        let service = QuestionService::new(None, PromptBuilder::default());

        let result = service.generate(&GenerateRequest::new(" ", false), None).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_rt::test]
    async fn missing_client_is_configuration_error() {
        let service = QuestionService::new(None, PromptBuilder::default());
        assert!(!service.is_configured());

        let result = service
            .generate(&GenerateRequest::new("Rust", false), None)
            .await;
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[actix_rt::test]
    async fn json_pipeline_returns_parsed_questions() {
        let mut mock = MockModelClient::new();
        mock.expect_complete()
            .withf(|prompt, format| {
                prompt.contains("closures in JavaScript") && *format == ResponseFormat::Json
            })
            .times(1)
            .returning(|_, _| Ok(fixtures::JSON_COMPLETION.to_string()));
        let service = service_with(mock, ResponseFormat::Json);

        let questions = service
            .generate(&GenerateRequest::new("closures in JavaScript", true), Some("req-1"))
            .await
            .unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "What is a closure?");
    }

    #[actix_rt::test]
    async fn qa_lines_pipeline_returns_parsed_questions() {
        let mut mock = MockModelClient::new();
        mock.expect_complete()
            .withf(|_, format| *format == ResponseFormat::QaLines)
            .times(1)
            .returning(|_, _| Ok(fixtures::QA_LINES_COMPLETION.to_string()));
        let service = service_with(mock, ResponseFormat::QaLines);

        let questions = service
            .generate(&GenerateRequest::new("Rust", false), None)
            .await
            .unwrap();
        assert_eq!(questions.len(), 3);
    }

    #[actix_rt::test]
    async fn provider_error_is_propagated() {
        let mut mock = MockModelClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_, _| Err(AppError::ProviderError("503 Service Unavailable".into())));
        let service = service_with(mock, ResponseFormat::Json);

        let result = service
            .generate(&GenerateRequest::new("Rust", false), None)
            .await;
        assert!(matches!(result, Err(AppError::ProviderError(_))));
    }

    #[actix_rt::test]
    async fn malformed_completion_is_parse_error() {
        let mut mock = MockModelClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_, _| Ok(fixtures::MALFORMED_JSON_COMPLETION.to_string()));
        let service = service_with(mock, ResponseFormat::Json);

        let result = service
            .generate(&GenerateRequest::new("Rust", false), None)
            .await;
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[actix_rt::test]
    async fn empty_question_list_is_parse_error() {
        let mut mock = MockModelClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_, _| Ok(r#"{"questions":[]}"#.to_string()));
        let service = service_with(mock, ResponseFormat::Json);

        let result = service
            .generate(&GenerateRequest::new("Rust", false), None)
            .await;
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }
}
