use crate::predict_api::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/predict", web::post().to(handlers::predict_handler))
        .route("/health", web::get().to(handlers::health_handler));
}

pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(handlers::json_error_handler)
}
