use std::sync::Arc;

use actix_web::{web, App};

use roteiro_api::{
    models::place::{Coordinates, RawPlace},
    routes,
    services::{
        catalog::Catalog,
        itinerary_generation_service::{ItineraryGenerationConfig, ItineraryGenerator},
        places_provider::{PlacesProvider, ProviderError, SearchQuery},
    },
};

/// Serves the same canned places for every search
#[derive(Clone)]
pub struct FakeProvider {
    pub places: Vec<RawPlace>,
    pub configured: bool,
    pub geocode_fails: bool,
}

impl FakeProvider {
    pub fn with_places(places: Vec<RawPlace>) -> Self {
        Self {
            places,
            configured: true,
            geocode_fails: false,
        }
    }
}

impl PlacesProvider for FakeProvider {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn geocode(&self, _destination: &str) -> Result<Coordinates, ProviderError> {
        if self.geocode_fails {
            return Err(ProviderError::Status {
                status: "ZERO_RESULTS".to_string(),
                message: None,
            });
        }
        Ok(Coordinates {
            lat: 38.7223,
            lng: -9.1393,
        })
    }

    async fn search_places(&self, _query: &SearchQuery) -> Result<Vec<RawPlace>, ProviderError> {
        Ok(self.places.clone())
    }
}

pub fn place(id: &str, name: &str, types: &[&str], price_level: Option<u8>) -> RawPlace {
    RawPlace {
        place_id: Some(id.to_string()),
        name: Some(name.to_string()),
        types: types.iter().map(|t| t.to_string()).collect(),
        price_level,
    }
}

pub fn create_app(
    provider: FakeProvider,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let generator = ItineraryGenerator::with_config(
        provider,
        Arc::new(Catalog::standard()),
        ItineraryGenerationConfig {
            search_concurrency: 2,
            seed: Some(7),
            max_trip_days: 30,
        },
    );

    App::new()
        .app_data(web::Data::new(generator))
        .configure(routes::configure::<FakeProvider>)
}
