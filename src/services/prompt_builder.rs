use once_cell::sync::Lazy;

use crate::{
    config::DEFAULT_QUESTION_COUNT,
    constants::interview_prompt::{
        CODE_BLOCK_RULES, CONTENT_REQUIREMENTS, INCLUDE_CODE_INSTRUCTION, JSON_FORMAT_EXAMPLE,
        JSON_OUTPUT_INSTRUCTIONS, MINIMAL_CODE_INSTRUCTION, PROMPT_INTRO,
        QA_LINES_OUTPUT_INSTRUCTIONS,
    },
    models::domain::{GenerationOptions, QuestionSet, ResponseFormat},
};

static QUESTION_SET_SCHEMA: Lazy<Option<String>> = Lazy::new(|| {
    let schema = schemars::schema_for!(QuestionSet);
    match serde_json::to_string_pretty(&schema) {
        Ok(schema) => Some(schema),
        Err(e) => {
            log::warn!("Could not serialize QuestionSet schema: {}", e);
            None
        }
    }
});

/// Builds the single text prompt sent to the model.
///
/// The prompt is the only place the output contract is enforced, so the
/// format instructions are stated once up front and repeated at the end.
#[derive(Clone, Debug)]
pub struct PromptBuilder {
    format: ResponseFormat,
    question_count: usize,
}

impl PromptBuilder {
    pub fn new(format: ResponseFormat, question_count: usize) -> Self {
        Self {
            format,
            question_count: question_count.max(1),
        }
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// `topic` must already be validated as non-blank. It is embedded exactly
    /// as given.
    pub fn build(&self, topic: &str, options: GenerationOptions) -> String {
        let count = self.question_count;
        let format_summary = match self.format {
            ResponseFormat::Json => "a single JSON object with a \"questions\" array",
            ResponseFormat::QaLines => "plain text \"Q: \" / \"A: \" pairs separated by blank lines",
        };
        let code_instruction = if options.include_code {
            INCLUDE_CODE_INSTRUCTION
        } else {
            MINIMAL_CODE_INSTRUCTION
        };

        let mut prompt = format!(
            "{PROMPT_INTRO} Generate exactly {count} technical interview questions and detailed answers about the topic: {topic}.\n\
             Respond with {format_summary}, exactly as described below.\n\
             {code_instruction}\n\n\
             {CONTENT_REQUIREMENTS}\n\n\
             {CODE_BLOCK_RULES}\n\n"
        );

        match self.format {
            ResponseFormat::Json => {
                prompt.push_str("## RESPONSE FORMAT\n\nReturn the JSON object in the following format (do not alter this format):\n");
                prompt.push_str(JSON_FORMAT_EXAMPLE);
                prompt.push_str("\n\n");
                if let Some(schema) = QUESTION_SET_SCHEMA.as_deref() {
                    prompt.push_str("The object must validate against this JSON Schema:\n");
                    prompt.push_str(schema);
                    prompt.push_str("\n\n");
                }
                prompt.push_str(JSON_OUTPUT_INSTRUCTIONS);
            }
            ResponseFormat::QaLines => prompt.push_str(QA_LINES_OUTPUT_INSTRUCTIONS),
        }

        prompt.push_str(&format!(
            "\n\nRemember: exactly {count} questions about {topic}, returned as {format_summary} and nothing else."
        ));
        prompt
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(ResponseFormat::default(), DEFAULT_QUESTION_COUNT)
    }
}

/// Builds a prompt with the default question count.
pub fn build_prompt(topic: &str, options: GenerationOptions, format: ResponseFormat) -> String {
    PromptBuilder::new(format, DEFAULT_QUESTION_COUNT).build(topic, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::interview_prompt::{ANSWER_MARKER, CODE_FENCE, QUESTION_MARKER};

    const WITH_CODE: GenerationOptions = GenerationOptions { include_code: true };
    const WITHOUT_CODE: GenerationOptions = GenerationOptions {
        include_code: false,
    };

    #[test]
    fn prompt_contains_topic_verbatim() {
        for format in [ResponseFormat::Json, ResponseFormat::QaLines] {
            let prompt = build_prompt("PostgreSQL window functions", WITHOUT_CODE, format);
            assert!(prompt.contains("PostgreSQL window functions"));
        }
    }

    #[test]
    fn prompt_keeps_surrounding_whitespace_of_topic() {
        let prompt = build_prompt("Rust  ", WITHOUT_CODE, ResponseFormat::Json);

        assert!(prompt.contains("about the topic: Rust  ."));
    }

    #[test]
    fn json_prompt_carries_json_contract() {
        let prompt = build_prompt("Rust", WITHOUT_CODE, ResponseFormat::Json);

        assert!(prompt.contains("\"questions\""));
        assert!(prompt.contains("\"question\""));
        assert!(prompt.contains("\"answer\""));
        assert!(prompt.contains(CODE_FENCE));
        assert!(prompt.contains("JSON Schema"));
    }

    #[test]
    fn qa_lines_prompt_carries_marker_contract() {
        let prompt = build_prompt("Rust", WITHOUT_CODE, ResponseFormat::QaLines);

        assert!(prompt.contains(QUESTION_MARKER));
        assert!(prompt.contains(ANSWER_MARKER));
        assert!(prompt.contains(CODE_FENCE));
        assert!(!prompt.contains("JSON Schema"));
    }

    #[test]
    fn include_code_changes_instructions() {
        let with_code = build_prompt("Go", WITH_CODE, ResponseFormat::Json);
        let without_code = build_prompt("Go", WITHOUT_CODE, ResponseFormat::Json);

        assert!(with_code.contains(INCLUDE_CODE_INSTRUCTION));
        assert!(without_code.contains(MINIMAL_CODE_INSTRUCTION));
        assert_ne!(with_code, without_code);
    }

    #[test]
    fn question_count_is_embedded() {
        let prompt = PromptBuilder::new(ResponseFormat::QaLines, 10).build("Kafka", WITHOUT_CODE);
        assert!(prompt.contains("exactly 10 technical interview questions"));

        let clamped = PromptBuilder::new(ResponseFormat::QaLines, 0);
        assert_eq!(clamped.question_count(), 1);
    }

    #[test]
    fn prompt_is_deterministic() {
        let builder = PromptBuilder::default();
        assert_eq!(
            builder.build("Docker", WITH_CODE),
            builder.build("Docker", WITH_CODE)
        );
    }
}
