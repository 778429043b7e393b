use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::{
    constants::interview_prompt::CODE_FENCE,
    errors::{AppError, AppResult},
    models::domain::{QaPair, ResponseFormat},
};

static QUESTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*Q:[ \t]?").expect("QUESTION_LINE is a valid regex pattern")
});

static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*A:[ \t]?").expect("ANSWER_LINE is a valid regex pattern")
});

/// Turns raw completion text into ordered [`QaPair`]s. Implementations are
/// pure: the same text always yields the same result.
pub trait ResponseParser: Send + Sync {
    fn parse(&self, raw: &str) -> AppResult<Vec<QaPair>>;
}

/// Entry as sent by the model. Some models add a separate `code` field even
/// when asked to fence code inside `answer`.
#[derive(Deserialize)]
struct WireQaPair {
    question: String,
    answer: String,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Deserialize)]
struct WireQuestionSet {
    questions: Vec<WireQaPair>,
}

impl From<WireQaPair> for QaPair {
    fn from(wire: WireQaPair) -> Self {
        let mut pair = QaPair::new(wire.question, wire.answer);
        if let Some(code) = wire.code.as_deref() {
            pair.append_code(code);
        }
        pair
    }
}

/// Strict decode of `{"questions": [{"question": ..., "answer": ...}]}`.
///
/// Any failure discards the whole batch; entries are never coerced.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonResponseParser;

impl ResponseParser for JsonResponseParser {
    fn parse(&self, raw: &str) -> AppResult<Vec<QaPair>> {
        let set: WireQuestionSet = serde_json::from_str(raw.trim())
            .map_err(|e| AppError::ParseError(format!("invalid questions JSON: {e}")))?;

        if let Some(index) = set
            .questions
            .iter()
            .position(|qa| qa.question.trim().is_empty())
        {
            return Err(AppError::ParseError(format!(
                "question {} has an empty question text",
                index + 1
            )));
        }

        Ok(set.questions.into_iter().map(QaPair::from).collect())
    }
}

/// Splits `Q:` / `A:` blocks.
///
/// A block starts at every line beginning with `Q:` outside a fenced code
/// block. A fence is a line whose first non-blank text is `` ``` ``; backticks
/// later in a line never open one. Text before the first such line is dropped. Inside a block the first
/// `A:` line separates question from answer and later markers stay in the
/// answer body.
#[derive(Debug, Default, Clone, Copy)]
pub struct QaLinesResponseParser;

fn is_fence_line(line: &str) -> bool {
    line.trim_start().starts_with(CODE_FENCE)
}

impl QaLinesResponseParser {
    /// Groups lines into `Q:` blocks. With `track_fences` set, `Q:` lines
    /// inside a fenced code block stay with the current block. Returns the
    /// blocks and whether a fence was still open at the end of the input.
    fn split_blocks(raw: &str, track_fences: bool) -> (Vec<Vec<&str>>, bool) {
        let mut blocks: Vec<Vec<&str>> = Vec::new();
        let mut in_fence = false;

        for line in raw.lines() {
            if !in_fence && QUESTION_LINE.is_match(line) {
                blocks.push(vec![line]);
            } else if let Some(block) = blocks.last_mut() {
                block.push(line);
            }

            if track_fences && is_fence_line(line) {
                in_fence = !in_fence;
            }
        }

        (blocks, in_fence)
    }

    fn parse_block(lines: &[&str]) -> Option<QaPair> {
        let answer_at = lines.iter().position(|line| ANSWER_LINE.is_match(line));
        let (question_lines, answer_lines) = match answer_at {
            Some(i) => lines.split_at(i),
            None => (lines, &[][..]),
        };

        let question = QUESTION_LINE
            .replace(&question_lines.join("\n"), "")
            .trim()
            .to_string();
        let answer = ANSWER_LINE
            .replace(&answer_lines.join("\n"), "")
            .trim()
            .to_string();

        if question.is_empty() && answer.is_empty() {
            return None;
        }
        Some(QaPair { question, answer })
    }
}

impl ResponseParser for QaLinesResponseParser {
    fn parse(&self, raw: &str) -> AppResult<Vec<QaPair>> {
        let (mut blocks, unclosed_fence) = Self::split_blocks(raw, true);
        if unclosed_fence {
            // A fence that never closes (truncated output) would swallow every
            // later question, so fall back to plain marker splitting.
            blocks = Self::split_blocks(raw, false).0;
        }
        if blocks.is_empty() {
            return Err(AppError::ParseError("no 'Q:' blocks found".into()));
        }

        let pairs: Vec<QaPair> = blocks
            .iter()
            .filter_map(|block| Self::parse_block(block))
            .collect();

        if let Some(index) = pairs.iter().position(|qa| qa.question.is_empty()) {
            return Err(AppError::ParseError(format!(
                "block {} has an empty question text",
                index + 1
            )));
        }

        Ok(pairs)
    }
}

static JSON_PARSER: JsonResponseParser = JsonResponseParser;
static QA_LINES_PARSER: QaLinesResponseParser = QaLinesResponseParser;

impl ResponseFormat {
    pub fn parser(self) -> &'static dyn ResponseParser {
        match self {
            ResponseFormat::Json => &JSON_PARSER,
            ResponseFormat::QaLines => &QA_LINES_PARSER,
        }
    }
}

pub fn parse(raw: &str, format: ResponseFormat) -> AppResult<Vec<QaPair>> {
    format.parser().parse(raw)
}
