//! Geocoding and place search.
//!
//! The itinerary engine only sees the [`PlacesProvider`] trait. The Google
//! implementation calls the Geocoding API once per request and the Places
//! Text Search API once per query. Calls are attempted exactly once; callers
//! decide whether a failure is fatal.

use std::future::Future;
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::AppConfig;
use crate::models::place::{Coordinates, RawPlace};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API key not configured")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status {
        status: String,
        message: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub location_bias: Option<String>,
    pub min_price: Option<u8>,
    pub max_price: Option<u8>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location_bias: None,
            min_price: None,
            max_price: None,
        }
    }

    pub fn biased_to(mut self, coordinates: &Coordinates) -> Self {
        self.location_bias = Some(coordinates.as_location_bias());
        self
    }

    pub fn with_min_price(mut self, min_price: Option<u8>) -> Self {
        self.min_price = min_price;
        self
    }

    pub fn with_max_price(mut self, max_price: Option<u8>) -> Self {
        self.max_price = max_price;
        self
    }
}

pub trait PlacesProvider {
    /// `false` when the provider cannot be called at all, e.g. no API key
    fn is_configured(&self) -> bool {
        true
    }

    fn geocode(
        &self,
        destination: &str,
    ) -> impl Future<Output = Result<Coordinates, ProviderError>>;

    fn search_places(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<RawPlace>, ProviderError>>;
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<RawPlace>,
    error_message: Option<String>,
}

#[derive(Clone)]
pub struct GooglePlacesClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    geocoding_url: Url,
    places_url: Url,
    language: String,
}

impl GooglePlacesClient {
    pub fn new(config: &AppConfig) -> Result<Self, ProviderError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            api_key: config.google_api_key.clone(),
            geocoding_url: config.geocoding_url.clone(),
            places_url: config.places_url.clone(),
            language: config.places_language.clone(),
        })
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)
    }
}

impl PlacesProvider for GooglePlacesClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn geocode(&self, destination: &str) -> Result<Coordinates, ProviderError> {
        let response: GeocodeResponse = self
            .http_client
            .get(self.geocoding_url.clone())
            .query(&[("address", destination), ("key", self.api_key()?)])
            .send()
            .await?
            .json()
            .await?;

        if response.status != "OK" {
            return Err(ProviderError::Status {
                status: response.status,
                message: response.error_message,
            });
        }

        response
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location)
            .ok_or_else(|| ProviderError::Status {
                status: "ZERO_RESULTS".to_string(),
                message: None,
            })
    }

    async fn search_places(&self, query: &SearchQuery) -> Result<Vec<RawPlace>, ProviderError> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.text.clone()),
            ("key", self.api_key()?.to_string()),
            ("language", self.language.clone()),
        ];
        if let Some(bias) = &query.location_bias {
            params.push(("locationbias", bias.clone()));
        }
        if let Some(min_price) = query.min_price {
            params.push(("minprice", min_price.to_string()));
        }
        if let Some(max_price) = query.max_price {
            params.push(("maxprice", max_price.to_string()));
        }

        debug!("Searching places: '{}' (max price {:?})", query.text, query.max_price);

        let response: TextSearchResponse = self
            .http_client
            .get(self.places_url.clone())
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        match response.status.as_str() {
            "OK" => {
                debug!("Search for '{}' returned {} results", query.text, response.results.len());
                Ok(response.results)
            }
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => Err(ProviderError::Status {
                status: response.status,
                message: response.error_message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param, query_param_is_missing},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer, api_key: Option<&str>) -> GooglePlacesClient {
        let config = AppConfig {
            google_api_key: api_key.map(str::to_string),
            geocoding_url: Url::parse(&format!("{}/geocode/json", server.uri())).unwrap(),
            places_url: Url::parse(&format!("{}/place/textsearch/json", server.uri())).unwrap(),
            ..AppConfig::default()
        };
        GooglePlacesClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_geocode_returns_first_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode/json"))
            .and(query_param("address", "lisboa"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [
                    {"geometry": {"location": {"lat": 38.72, "lng": -9.14}}},
                    {"geometry": {"location": {"lat": 0.0, "lng": 0.0}}}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-key"));
        let coords = client.geocode("lisboa").await.unwrap();
        assert_eq!(coords, Coordinates { lat: 38.72, lng: -9.14 });
    }

    #[tokio::test]
    async fn test_geocode_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "REQUEST_DENIED",
                "error_message": "The provided API key is invalid."
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("bad-key"));
        match client.geocode("nowhere").await {
            Err(ProviderError::Status { status, message }) => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message.as_deref(), Some("The provided API key is invalid."));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_geocode_without_key_makes_no_request() {
        let server = MockServer::start().await;
        let client = client_for(&server, None);
        assert!(!client.is_configured());
        assert!(matches!(
            client.geocode("lisboa").await,
            Err(ProviderError::MissingApiKey)
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_sends_filters_and_parses_places() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/place/textsearch/json"))
            .and(query_param("query", "cafes em lisboa"))
            .and(query_param("language", "pt-BR"))
            .and(query_param("locationbias", "point:38.72,-9.14"))
            .and(query_param("maxprice", "1"))
            .and(query_param_is_missing("minprice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [
                    {
                        "place_id": "abc",
                        "name": "Café A Brasileira",
                        "types": ["cafe", "food", "point_of_interest"],
                        "price_level": 1,
                        "rating": 4.3
                    },
                    {"name": "No id"}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-key"));
        let query = SearchQuery::new("cafes em lisboa")
            .biased_to(&Coordinates { lat: 38.72, lng: -9.14 })
            .with_max_price(Some(1));
        let places = client.search_places(&query).await.unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].place_id.as_deref(), Some("abc"));
        assert_eq!(places[0].price_level, Some(1));
        assert!(places[0].has_type("cafe"));
        assert!(places[1].place_id.is_none());
        assert!(places[1].types.is_empty());
    }

    #[tokio::test]
    async fn test_search_sends_price_floor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/place/textsearch/json"))
            .and(query_param("minprice", "3"))
            .and(query_param("maxprice", "4"))
            .and(query_param_is_missing("locationbias"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [{"place_id": "lux", "name": "Belcanto", "price_level": 4}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-key"));
        let query = SearchQuery::new("restaurantes finos em lisboa")
            .with_min_price(Some(3))
            .with_max_price(Some(4));
        let places = client.search_places(&query).await.unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].price_level, Some(4));
    }

    #[tokio::test]
    async fn test_search_zero_results_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/place/textsearch/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"status": "ZERO_RESULTS"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-key"));
        let places = client
            .search_places(&SearchQuery::new("praias em madri"))
            .await
            .unwrap();
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn test_search_over_quota_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/place/textsearch/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OVER_QUERY_LIMIT",
                "results": []
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-key"));
        let err = client
            .search_places(&SearchQuery::new("museu porto"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "provider returned OVER_QUERY_LIMIT: no details");
    }
}
