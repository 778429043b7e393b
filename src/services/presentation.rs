use once_cell::sync::Lazy;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

use crate::models::domain::{QaPair, Segment};

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(.*?)```").expect("FENCED_BLOCK is a valid regex pattern"));

static LANGUAGE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_+#.\-]+$").expect("LANGUAGE_TAG is a valid regex pattern")
});

fn trim_newlines(text: &str) -> &str {
    text.trim_matches(|c| c == '\n' || c == '\r')
}

fn push_prose(segments: &mut Vec<Segment>, text: &str) {
    let text = trim_newlines(text);
    if !text.trim().is_empty() {
        segments.push(Segment::prose(text));
    }
}

/// Splits the inner text of a fence into an optional language tag and code.
fn split_fence_body(body: &str) -> (Option<&str>, &str) {
    match body.split_once('\n') {
        Some((first, rest)) => {
            let tag = first.trim();
            if tag.is_empty() {
                (None, rest)
            } else if LANGUAGE_TAG.is_match(tag) {
                (Some(tag), rest)
            } else {
                (None, body)
            }
        }
        None => (None, body),
    }
}

/// Splits `answer` on matching triple-backtick pairs, in order.
///
/// Text outside the fences becomes prose (newlines next to a fence are
/// dropped, whitespace-only runs are skipped); text inside becomes code with
/// the markers and the language tag removed. An unmatched fence stays prose.
/// An answer without fences is returned unchanged as a single prose segment.
pub fn render(answer: &str) -> Vec<Segment> {
    if !FENCED_BLOCK.is_match(answer) {
        return vec![Segment::prose(answer)];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;

    for captures in FENCED_BLOCK.captures_iter(answer) {
        let (Some(whole), Some(body)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        push_prose(&mut segments, &answer[cursor..whole.start()]);

        let (language, code) = split_fence_body(body.as_str());
        segments.push(Segment::code(language, trim_newlines(code).trim_end()));

        cursor = whole.end();
    }

    push_prose(&mut segments, &answer[cursor..]);
    segments
}

/// Markdown to HTML with raw HTML from the model shown as text.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn code_to_html(language: Option<&str>, code: &str) -> String {
    let kind = match language {
        Some(lang) => CodeBlockKind::Fenced(CowStr::Borrowed(lang)),
        None => CodeBlockKind::Fenced(CowStr::Borrowed("")),
    };
    let events = [
        Event::Start(Tag::CodeBlock(kind)),
        Event::Text(CowStr::Borrowed(code)),
        Event::Text(CowStr::Borrowed("\n")),
        Event::End(TagEnd::CodeBlock),
    ];

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

/// One `<article>` per question: heading plus answer segments.
pub fn render_card(index: usize, qa: &QaPair) -> String {
    let mut card = format!(
        "<article class=\"card\" id=\"question-{}\">\n<div class=\"question\">{}</div>\n<div class=\"answer\">\n",
        index + 1,
        markdown_to_html(&qa.question)
    );

    for segment in render(&qa.answer) {
        match segment {
            Segment::Prose { text } => card.push_str(&markdown_to_html(&text)),
            Segment::Code { language, code } => {
                card.push_str(&code_to_html(language.as_deref(), &code))
            }
        }
    }

    card.push_str("</div>\n</article>\n");
    card
}
