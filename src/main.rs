use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use interview_prep::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

fn cors(config: &Config) -> Cors {
    match &config.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600),
        None => Cors::default(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    log::info!(
        "Starting HTTP server on http://{}:{} (response format {}, {} questions per request)",
        bind.0,
        bind.1,
        state.config.response_format,
        state.config.question_count
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(&state.config))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new("%a \"%r\" %s %b %{x-request-id}o %T"))
            .configure(handlers::configure)
    })
    .bind(bind)?
    .run()
    .await
}
