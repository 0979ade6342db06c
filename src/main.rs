use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use roteiro_api::{
    config::AppConfig,
    routes,
    services::{
        catalog::Catalog,
        itinerary_generation_service::{ItineraryGenerationConfig, ItineraryGenerator},
        places_provider::GooglePlacesClient,
    },
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    if !config.has_credentials() {
        warn!("GOOGLE_API_KEY is not set; itinerary generation will be refused");
    }

    let provider = GooglePlacesClient::new(&config).map_err(io::Error::other)?;
    let generator = web::Data::new(ItineraryGenerator::with_config(
        provider,
        Arc::new(Catalog::standard()),
        ItineraryGenerationConfig::from(&config),
    ));

    info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(generator.clone())
            .configure(routes::configure::<GooglePlacesClient>)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
