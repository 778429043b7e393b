use actix_web::{error::JsonPayloadError, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{GenerateRequest, GenerateResponse},
};

#[post("/api/generate")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);
    let questions = state
        .question_service
        .generate(&request, request_id.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(GenerateResponse::success(questions)))
}

/// Unreadable bodies get the same `{questions, error}` shape as other failures.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!(
        "[{}] Rejected request body: {}",
        get_request_id(req).as_deref().unwrap_or("-"),
        err
    );
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}
