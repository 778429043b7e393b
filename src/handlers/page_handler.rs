use actix_web::{get, http::header::ContentType, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::QaPair,
        dto::{GenerateForm, GenerateRequest},
    },
    services::presentation::render_card,
};

const PAGE_STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:800px;margin:0 auto;padding:20px;color:#333}\
input[type=text]{width:100%;padding:10px;border:1px solid #ccc;border-radius:5px;box-sizing:border-box}\
button{width:100%;padding:10px;margin-top:10px;background:#007bff;color:#fff;border:none;border-radius:5px;cursor:pointer}\
.error{color:#c00;margin-top:10px}\
.card{border:1px solid #ddd;border-radius:5px;padding:15px;margin-bottom:20px}\
.question{font-weight:600;font-size:1.1em}\
pre{background:#282c34;color:#fff;padding:10px;border-radius:5px;overflow-x:auto}";

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[derive(Debug, Default)]
struct PageView<'a> {
    topic: &'a str,
    include_code: bool,
    question_count: usize,
    questions: &'a [QaPair],
    error: Option<String>,
}

impl PageView<'_> {
    fn render(&self) -> String {
        let mut page = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Interview Question Generator</title>\n<style>{PAGE_STYLE}</style>\n</head>\n<body>\n\
             <h1>Interview Question Generator</h1>\n\
             <form method=\"post\" action=\"/\">\n\
             <input type=\"text\" name=\"topic\" value=\"{}\" placeholder=\"Enter subject (e.g., React, TypeScript, Node.js)\" required>\n\
             <label><input type=\"checkbox\" name=\"include_code\"{}> Include Code Examples</label>\n\
             <button type=\"submit\">Generate Questions</button>\n\
             <p>Each request generates {} questions.</p>\n</form>\n",
            escape_attr(self.topic),
            if self.include_code { " checked" } else { "" },
            self.question_count,
        );

        if let Some(error) = &self.error {
            page.push_str(&format!("<div class=\"error\">{}</div>\n", escape_attr(error)));
        }

        if !self.questions.is_empty() {
            page.push_str("<section>\n<h2>Generated Questions and Answers</h2>\n");
            for (position, qa) in self.questions.iter().enumerate() {
                page.push_str(&render_card(position, qa));
            }
            page.push_str("</section>\n");
        }

        page.push_str("</body>\n</html>\n");
        page
    }
}

fn html_response(status: actix_web::http::StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let view = PageView {
        question_count: state.config.question_count,
        ..PageView::default()
    };
    html_response(actix_web::http::StatusCode::OK, view.render())
}

#[post("/")]
pub async fn generate_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<GenerateForm>,
) -> HttpResponse {
    let request: GenerateRequest = form.into_inner().into();
    let request_id = get_request_id(&req);

    let result = state
        .question_service
        .generate(&request, request_id.as_deref())
        .await;

    let (status, questions, error) = match result {
        Ok(questions) => (actix_web::http::StatusCode::OK, questions, None),
        Err(e) => {
            let status = actix_web::ResponseError::status_code(&e);
            (status, Vec::new(), Some(page_error_message(&e)))
        }
    };

    let view = PageView {
        topic: &request.topic,
        include_code: request.include_code,
        question_count: state.config.question_count,
        questions: &questions,
        error,
    };
    html_response(status, view.render())
}

fn page_error_message(err: &AppError) -> String {
    match err {
        AppError::ValidationError(_) => "Please enter a subject".to_string(),
        _ => "Failed to generate questions. Please try again.".to_string(),
    }
}
