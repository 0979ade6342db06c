use actix_web::web;
use log::debug;

use crate::{error::ItineraryError, services::places_provider::PlacesProvider};

pub mod health;
pub mod itinerary;

/// Register every route. Expects `web::Data<ItineraryGenerator<P>>` in app data.
pub fn configure<P: PlacesProvider + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        debug!("Rejected request body: {}", err);
        ItineraryError::BadRequest(err.to_string()).into()
    }))
    .route("/health", web::get().to(health::health_check::<P>))
    .service(
        web::scope("/api")
            .route("/hello", web::get().to(health::hello))
            .route(
                "/generate_roteiro",
                web::post().to(itinerary::generate_roteiro::<P>),
            ),
    );
}
