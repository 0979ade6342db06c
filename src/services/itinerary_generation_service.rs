use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::ItineraryError;
use crate::models::{
    itinerary::{ItineraryRequest, ItineraryResponse},
    place::{Coordinates, RawPlace},
    point::{Interest, TravelerType},
};
use crate::services::{
    budget::BudgetAdvisor,
    candidate_pool::{build_pool, PoolError},
    catalog::Catalog,
    day_scheduler::DayScheduler,
    places_provider::{PlacesProvider, SearchQuery},
    scoring::{RelevanceScorer, ScoringCriteria},
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct ItineraryGenerationConfig {
    /// Place searches in flight at once; 1 runs them one after another
    pub search_concurrency: usize,
    pub seed: Option<u64>,
    pub max_trip_days: u32,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            search_concurrency: 1,
            seed: None,
            max_trip_days: 30,
        }
    }
}

impl From<&AppConfig> for ItineraryGenerationConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            search_concurrency: config.search_concurrency.max(1),
            seed: config.seed,
            max_trip_days: config.max_trip_days.max(1),
        }
    }
}

/// A request that passed validation
#[derive(Debug, Clone)]
pub struct TripPlan {
    pub destination: String,
    pub days: u32,
    pub price_ceiling: u8,
    pub criteria: ScoringCriteria,
}

impl TripPlan {
    /// Trips longer than `max_days` are rejected before anything is scheduled
    pub fn from_request(request: &ItineraryRequest, max_days: u32) -> Result<Self, ItineraryError> {
        let start = parse_date(request.start_date.as_deref())?;
        let end = parse_date(request.end_date.as_deref())?;
        if end < start {
            return Err(ItineraryError::InvalidDateRange);
        }
        let span = (end - start).num_days() + 1;
        if span > i64::from(max_days) {
            return Err(ItineraryError::TripTooLong(max_days));
        }
        let days = span as u32;

        let budget = request
            .budget
            .filter(|budget| budget.is_finite() && *budget >= 0.0)
            .ok_or(ItineraryError::InvalidBudget)?;
        let price_ceiling = BudgetAdvisor::price_ceiling(budget);

        let destination = request.destination.trim().to_lowercase();
        if destination.is_empty() {
            return Err(ItineraryError::BadRequest("destino não informado".to_string()));
        }

        let mut interests: Vec<Interest> = Vec::new();
        for key in &request.interests {
            match Interest::from_key(key) {
                Some(interest) if !interests.contains(&interest) => interests.push(interest),
                Some(_) => {}
                None => debug!("Ignoring unknown interest '{}'", key),
            }
        }

        let traveler_type = request
            .traveler_type
            .as_deref()
            .and_then(TravelerType::from_key);

        Ok(Self {
            destination,
            days,
            price_ceiling,
            criteria: ScoringCriteria {
                interests,
                traveler_type,
                price_ceiling,
            },
        })
    }
}

fn parse_date(value: Option<&str>) -> Result<NaiveDate, ItineraryError> {
    let value = value.ok_or(ItineraryError::InvalidDate)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ItineraryError::InvalidDate)
}

pub struct ItineraryGenerator<P> {
    provider: P,
    catalog: Arc<Catalog>,
    scorer: RelevanceScorer,
    scheduler: DayScheduler,
    config: ItineraryGenerationConfig,
}

impl<P: PlacesProvider> ItineraryGenerator<P> {
    pub fn new(provider: P, catalog: Arc<Catalog>) -> Self {
        Self::with_config(provider, catalog, ItineraryGenerationConfig::default())
    }

    pub fn with_config(provider: P, catalog: Arc<Catalog>, config: ItineraryGenerationConfig) -> Self {
        Self {
            provider,
            scorer: RelevanceScorer::new(catalog.clone()),
            catalog,
            scheduler: DayScheduler::new(),
            config,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate a day-by-day itinerary for the request
    pub async fn generate_itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> Result<ItineraryResponse, ItineraryError> {
        if !self.provider.is_configured() {
            return Err(ItineraryError::MissingApiKey);
        }

        let trip = TripPlan::from_request(request, self.config.max_trip_days)?;
        let request_id = Uuid::new_v4();
        info!(
            "[{}] Generating {}-day itinerary for '{}' (interests: {:?}, traveler: {:?}, price ceiling: {})",
            request_id,
            trip.days,
            trip.destination,
            trip.criteria.interests,
            trip.criteria.traveler_type,
            trip.price_ceiling
        );

        let coordinates = self
            .provider
            .geocode(&trip.destination)
            .await
            .map_err(|e| {
                warn!("[{}] Could not geocode '{}': {}", request_id, trip.destination, e);
                ItineraryError::DestinationNotFound(trip.destination.clone())
            })?;

        let queries = self.plan_queries(&trip, &coordinates);
        let places = self.collect_places(&queries).await;
        debug!(
            "[{}] {} queries returned {} places",
            request_id,
            queries.len(),
            places.len()
        );

        let mut rng = self.rng();
        let pool = build_pool(places, &self.catalog, &self.scorer, &trip.criteria, &mut rng)
            .map_err(|e| {
                info!("[{}] No itinerary for '{}': {}", request_id, trip.destination, e);
                match e {
                    PoolError::NoCandidates => ItineraryError::NoPointsFound(trip.destination.clone()),
                    PoolError::NoneRelevant(_) => {
                        ItineraryError::NoRelevantPoints(trip.destination.clone())
                    }
                }
            })?;

        let mut used = HashSet::new();
        let days = self.scheduler.schedule(&pool, trip.days, &mut used);
        info!(
            "[{}] Scheduled {} of {} candidate points over {} days",
            request_id,
            used.len(),
            pool.len(),
            days.len()
        );

        Ok(ItineraryResponse {
            days,
            budget_advice: BudgetAdvisor::advice(trip.price_ceiling).to_string(),
        })
    }

    /// Searches for every selected interest followed by the general
    /// sightseeing searches
    pub fn plan_queries(&self, trip: &TripPlan, coordinates: &Coordinates) -> Vec<SearchQuery> {
        let mut queries = Vec::new();

        for interest in &trip.criteria.interests {
            let Some(profile) = self.catalog.profile(*interest) else {
                continue;
            };
            let max_price = profile.price_filtered.then_some(trip.price_ceiling);
            queries.extend(profile.queries(&trip.destination).into_iter().map(|text| {
                SearchQuery::new(text)
                    .biased_to(coordinates)
                    .with_max_price(max_price)
            }));
        }

        queries.extend(
            self.catalog
                .general_queries(&trip.destination)
                .into_iter()
                .map(|text| SearchQuery::new(text).biased_to(coordinates)),
        );

        queries
    }

    /// Run every search and concatenate the results in query order. A failed
    /// search counts as no results.
    async fn collect_places(&self, queries: &[SearchQuery]) -> Vec<RawPlace> {
        let results: Vec<Vec<RawPlace>> = stream::iter(queries)
            .map(|query| async move {
                match self.provider.search_places(query).await {
                    Ok(places) => places,
                    Err(e) => {
                        warn!("Place search '{}' failed: {}", query.text, e);
                        Vec::new()
                    }
                }
            })
            .buffered(self.config.search_concurrency.max(1))
            .collect()
            .await;

        results.into_iter().flatten().collect()
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
