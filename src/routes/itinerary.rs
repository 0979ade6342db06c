use actix_web::{web, HttpResponse};

use crate::{
    error::ItineraryError,
    models::itinerary::ItineraryRequest,
    services::{itinerary_generation_service::ItineraryGenerator, places_provider::PlacesProvider},
};

/*
    /api/generate_roteiro
*/
pub async fn generate_roteiro<P: PlacesProvider + 'static>(
    generator: web::Data<ItineraryGenerator<P>>,
    input: web::Json<ItineraryRequest>,
) -> Result<HttpResponse, ItineraryError> {
    let itinerary = generator.generate_itinerary(&input).await?;
    Ok(HttpResponse::Ok().json(itinerary))
}
