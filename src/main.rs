use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;

mod config;
mod controllers;
mod db;
mod errors;
mod models;
mod routes;
mod services;
mod state;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file (if exists)
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Read configuration once: server host/port and database settings.
    let config = config::Config::from_env();

    // A missing or invalid database configuration is not fatal.
    let store: Option<Arc<dyn db::DocumentStore>> = db::init_db(&config)
        .await
        .map(|s| Arc::new(s) as Arc<dyn db::DocumentStore>);

    // Seed demo advisors before accepting requests; best effort.
    services::seed_service::seed_advisors_if_empty(store.as_deref()).await;

    let app_state = state::AppState::new(store, config.clone());

    log::info!(
        "listening on {}:{}",
        config.server_host,
        config.server_port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default()) // Logging middleware
            .wrap(routes::cors()) // CORS setup
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::init)
    })
    .bind((config.server_host, config.server_port))?
    .run()
    .await
}
