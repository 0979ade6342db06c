pub mod budget;
pub mod candidate_pool;
pub mod catalog;
pub mod day_scheduler;
pub mod itinerary_generation_service;
pub mod normalizer;
pub mod places_provider;
pub mod scoring;
