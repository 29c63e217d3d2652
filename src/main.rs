use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context as _, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aroundme::config::Config;
use aroundme::controller;
use aroundme::db;
use aroundme::repository::SqlitePlaceStore;
use aroundme::state::AppState;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(host = %config.host, port = config.port, db_path = %config.db_path, "starting AroundMe API");

    let conn = db::open(&config.db_path)?;
    let state = web::Data::new(AppState::new());
    state.set_store(Arc::new(SqlitePlaceStore::new(conn)));

    HttpServer::new({
        let state = state.clone();
        move || {
            App::new()
                .app_data(state.clone())
                .wrap(Cors::permissive())
                .wrap(middleware::Logger::default())
                .service(controller::place::index)
                .service(controller::place::nearby_places)
                .service(controller::place::places_by_address)
                .service(controller::place::search_places)
        }
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
