use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use std::io;

use crate::config::ServerConfig;
use crate::error::json_error_handler;
use crate::handlers;
use crate::middleware::RequestIdMiddleware;
use crate::state::AppState;

/// Body parsing for write routes. Any content type is accepted; only the
/// JSON shape matters.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|_| true)
        .content_type_required(false)
        .error_handler(json_error_handler)
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(handlers::health::handler))
        .route("/todos", web::get().to(handlers::todos::list))
        .route("/todos", web::post().to(handlers::todos::create))
        .route("/todos/{id}", web::get().to(handlers::todos::get))
        .route("/todos/{id}", web::put().to(handlers::todos::update))
        .route("/todos/{id}", web::delete().to(handlers::todos::delete))
        .default_service(web::route().to(handlers::not_found));
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let state = web::Data::new(AppState::from_config(&config));
    log::info!(
        "Initializing todo store with {} records",
        state.store.len().await
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .configure(app_config)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind(config.bind_address())?.run();
    log::info!("Todo server listening on http://{}", config.bind_address());
    server.await
}
