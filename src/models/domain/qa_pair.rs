use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One generated interview question and its answer.
///
/// `answer` is markdown and may embed fenced code blocks; it can be empty when
/// the model truncated its output.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QaPair {
    /// The interview question, never empty once parsed.
    pub question: String,
    /// Markdown answer, code examples in triple-backtick fences with a language tag.
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Appends a code example to the answer as its own fenced block. Blank
    /// code leaves the answer untouched.
    pub fn append_code(&mut self, code: &str) {
        let code = code.trim_matches(|c| c == '\n' || c == '\r');
        if code.trim().is_empty() {
            return;
        }
        if !self.answer.is_empty() {
            self.answer.push_str("\n\n");
        }
        self.answer.push_str("```\n");
        self.answer.push_str(code);
        self.answer.push_str("\n```");
    }
}

/// The object the model is asked to return in JSON mode.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuestionSet {
    pub questions: Vec<QaPair>,
}
