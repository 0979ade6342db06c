use std::collections::HashSet;

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::models::{place::RawPlace, point::ScoredPoint};
use crate::services::{
    catalog::Catalog,
    normalizer::normalize,
    scoring::{RelevanceScorer, ScoringCriteria},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("no candidates were collected")]
    NoCandidates,
    #[error("{0} candidates were collected but none reached the minimum score")]
    NoneRelevant(usize),
}

/// Drop records without a `place_id` and keep the first occurrence of each id
pub fn dedup_places(places: Vec<RawPlace>) -> Vec<RawPlace> {
    let mut seen = HashSet::new();
    places
        .into_iter()
        .filter(|place| match &place.place_id {
            Some(id) => seen.insert(id.clone()),
            None => false,
        })
        .collect()
}

/// Normalize, score and filter the collected places, best first.
pub fn build_pool<R: Rng + ?Sized>(
    places: Vec<RawPlace>,
    catalog: &Catalog,
    scorer: &RelevanceScorer,
    criteria: &ScoringCriteria,
    rng: &mut R,
) -> Result<Vec<ScoredPoint>, PoolError> {
    let unique = dedup_places(places);
    debug!("Unique places collected: {}", unique.len());

    if unique.is_empty() {
        return Err(PoolError::NoCandidates);
    }

    let scored: Vec<ScoredPoint> = unique
        .iter()
        .filter_map(|place| normalize(place, catalog, rng))
        .map(|point| {
            let score = scorer.score(&point, criteria);
            ScoredPoint { point, score }
        })
        .collect();
    let total = scored.len();

    let mut pool: Vec<ScoredPoint> = scored
        .into_iter()
        .filter(|candidate| scorer.is_relevant(candidate.score))
        .collect();
    debug!(
        "Places after score filter (>= {}): {}",
        scorer.weights.minimum_score,
        pool.len()
    );

    if pool.is_empty() {
        return Err(PoolError::NoneRelevant(total));
    }

    // stable, so ties keep collection order
    pool.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(pool)
}
