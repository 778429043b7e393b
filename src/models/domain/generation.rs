use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Serialization contract the prompt asks for, and therefore the parser used
/// on the completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseFormat {
    /// `{"questions": [{"question": ..., "answer": ...}]}`
    #[default]
    Json,
    /// `Q: ...` / `A: ...` blocks separated by blank lines.
    QaLines,
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseFormat::Json => write!(f, "json"),
            ResponseFormat::QaLines => write!(f, "qa-lines"),
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "qa-lines" | "qa_lines" | "qa" | "text" => Ok(ResponseFormat::QaLines),
            other => Err(format!("unknown response format '{other}'")),
        }
    }
}

/// Per-request switches for the prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub include_code: bool,
}
