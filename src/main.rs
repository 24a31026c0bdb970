mod classifier;
mod predict_api;
mod settings;
mod utils;

use classifier::loader::load;
use predict_api::routes::{configure_routes, json_config};
use predict_api::server_api::Predictor;
use settings::model::Settings;

use actix_web::{App, HttpServer, middleware, web};
use anyhow::{Context, Result};
use dotenv::dotenv;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;

    // Без модели сервис не стартует
    let classifier = load(&settings.model_path)?;
    let predictor = web::Data::new(Predictor::new(Arc::new(classifier), settings.variant));

    log::info!(
        "Server running at http://{}:{} (API {})",
        settings.host,
        settings.port,
        predictor.variant()
    );

    let json_limit = settings.json_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(predictor.clone())
            .app_data(json_config(json_limit))
            .configure(configure_routes)
    })
    .bind((settings.host.as_str(), settings.port))
    .with_context(|| format!("cannot bind {}:{}", settings.host, settings.port))?
    .run()
    .await?;

    Ok(())
}
