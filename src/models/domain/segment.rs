use serde::Serialize;

/// A piece of an answer body, either markdown prose or a fenced code block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Prose {
        text: String,
    },
    Code {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        code: String,
    },
}

impl Segment {
    pub fn prose(text: impl Into<String>) -> Self {
        Segment::Prose { text: text.into() }
    }

    pub fn code(language: Option<&str>, code: impl Into<String>) -> Self {
        Segment::Code {
            language: language.map(str::to_string),
            code: code.into(),
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code { .. })
    }
}
