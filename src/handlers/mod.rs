pub mod generate_handler;
pub mod health_handler;
pub mod page_handler;

use actix_web::web;

pub use generate_handler::{generate_questions, json_error_handler};
pub use health_handler::health_check;
pub use page_handler::{generate_page, index};

/// Registers every route and the JSON body error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_check)
        .service(generate_questions)
        .service(index)
        .service(generate_page);
}
