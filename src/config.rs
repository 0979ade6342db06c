use std::env;

use thiserror::Error;
use url::Url;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 5000;
const GEOCODING_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const PLACES_API_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
const PLACES_LANGUAGE: &str = "pt-BR";
const PLACES_HTTP_TIMEOUT_SECS: u64 = 10;
const SEARCH_CONCURRENCY: usize = 1;
const MAX_TRIP_DAYS: u32 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Missing credentials do not stop the server; generation requests are
    /// rejected instead
    pub google_api_key: Option<String>,
    pub geocoding_url: Url,
    pub places_url: Url,
    pub places_language: String,
    pub http_timeout_secs: u64,
    /// How many place searches may be in flight at once for one request
    pub search_concurrency: usize,
    /// Longest trip, in days, a request may ask for
    pub max_trip_days: u32,
    /// Pins the duration / time-of-day draws; random per request when unset
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            google_api_key: None,
            geocoding_url: Url::parse(GEOCODING_API_URL).expect("valid default geocoding URL"),
            places_url: Url::parse(PLACES_API_URL).expect("valid default places URL"),
            places_language: PLACES_LANGUAGE.to_string(),
            http_timeout_secs: PLACES_HTTP_TIMEOUT_SECS,
            search_concurrency: SEARCH_CONCURRENCY,
            max_trip_days: MAX_TRIP_DAYS,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from environment variables or use defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed_var("PORT").unwrap_or(defaults.port),
            google_api_key: env::var("GOOGLE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            geocoding_url: url_var("GEOCODING_API_URL")?.unwrap_or(defaults.geocoding_url),
            places_url: url_var("PLACES_API_URL")?.unwrap_or(defaults.places_url),
            places_language: env::var("PLACES_LANGUAGE").unwrap_or(defaults.places_language),
            http_timeout_secs: parsed_var("PLACES_HTTP_TIMEOUT_SECS")
                .unwrap_or(defaults.http_timeout_secs),
            search_concurrency: parsed_var("SEARCH_CONCURRENCY")
                .unwrap_or(defaults.search_concurrency)
                .max(1),
            max_trip_days: parsed_var("MAX_TRIP_DAYS")
                .unwrap_or(defaults.max_trip_days)
                .max(1),
            seed: parsed_var("ITINERARY_SEED"),
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.google_api_key.is_some()
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

fn url_var(name: &'static str) -> Result<Option<Url>, ConfigError> {
    match env::var(name) {
        Ok(value) => Url::parse(&value)
            .map(Some)
            .map_err(|source| ConfigError::InvalidUrl { name, source }),
        Err(_) => Ok(None),
    }
}
