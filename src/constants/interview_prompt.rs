pub const SAMPLING_TEMPERATURE: f32 = 0.7;
pub const SAMPLING_TOP_P: f32 = 0.8;
pub const MAX_OUTPUT_TOKENS: u32 = 8192;

pub const QUESTION_MARKER: &str = "Q:";
pub const ANSWER_MARKER: &str = "A:";
pub const CODE_FENCE: &str = "```";

pub const PROMPT_INTRO: &str = "You are an expert technical interviewer.";

pub const INCLUDE_CODE_INSTRUCTION: &str =
    "Include relevant code examples in most answers, showing both the idiomatic solution and how it is used.";

pub const MINIMAL_CODE_INSTRUCTION: &str =
    "Only include code examples where an answer cannot be explained properly without one.";

pub const CONTENT_REQUIREMENTS: &str = "## CONTENT REQUIREMENTS

- Make the questions progressively more challenging
- Cover both theoretical and practical aspects of the topic
- Provide detailed, educational explanations in the answers
- Include real-world applications and examples where relevant
- Do not use the * character anywhere in the output, not even for emphasis";

pub const CODE_BLOCK_RULES: &str = "## CODE EXAMPLES

- Wrap every code example in a markdown fenced code block using triple backticks
- Put the language name right after the opening backticks (for example ```python, ```sql, ```javascript)
- Never put code outside a fenced code block";

pub const JSON_FORMAT_EXAMPLE: &str = r#"{
  "questions": [
    {
      "question": "Question text here",
      "answer": "Answer text here (with markdown code blocks for code examples)"
    }
  ]
}"#;

pub const JSON_OUTPUT_INSTRUCTIONS: &str = "## OUTPUT INSTRUCTIONS

Return ONLY the JSON object. Do not include:
- Explanatory text before or after the JSON
- A markdown code block around the JSON itself
- Any fields other than \"question\" and \"answer\" inside each entry
- Multiple JSON objects or arrays

Code examples belong inside the \"answer\" string as fenced code blocks with newlines escaped as \\n.
The response must be a single, valid JSON object that can be immediately parsed.
Always use this exact format, whatever the topic is.";

pub const QA_LINES_OUTPUT_INSTRUCTIONS: &str = "## OUTPUT INSTRUCTIONS

Format each question and answer pair exactly like this:

Q: [question]
A: [answer]

- Start every question on a new line with \"Q: \" and every answer on a new line with \"A: \"
- Separate each Q&A pair with a single blank line
- Do not number the questions and do not add headings, introductions or closing remarks
- Strictly follow this format, whatever the topic is";
