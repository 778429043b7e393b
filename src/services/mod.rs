pub mod model_client;
pub mod presentation;
pub mod prompt_builder;
pub mod question_service;
pub mod response_parser;
