use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::services::{
    itinerary_generation_service::ItineraryGenerator, places_provider::PlacesProvider,
};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    places_api: String,
    version: String,
}

/*
    /api/hello
*/
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"message": "Backend está rodando!"}))
}

/*
    /health
*/
pub async fn health_check<P: PlacesProvider + 'static>(
    generator: web::Data<ItineraryGenerator<P>>,
) -> impl Responder {
    let places_api = if generator.provider().is_configured() {
        "configured"
    } else {
        "missing"
    };

    HttpResponse::Ok().json(HealthStatus {
        status: "OK".to_string(),
        places_api: places_api.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
