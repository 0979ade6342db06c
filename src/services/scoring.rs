use std::sync::Arc;

use crate::models::point::{Interest, PointOfInterest, TravelerType};
use crate::services::catalog::Catalog;

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    /// Added once per selected interest the point matches
    pub interest_match_boost: u32,
    /// Subtracted per price tier above the ceiling
    pub over_budget_penalty: u32,
    /// Score given to a point with no signal at all
    pub baseline_score: u32,
    /// Any weak but non-zero score is raised to this
    pub weak_signal_floor: u32,
    /// Minimum score required to include in the itinerary
    pub minimum_score: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest_match_boost: 200,
            over_budget_penalty: 10,
            baseline_score: 10,
            weak_signal_floor: 25,
            minimum_score: 30,
        }
    }
}

/// What the traveler asked for, resolved against the known vocabulary
#[derive(Debug, Clone, Default)]
pub struct ScoringCriteria {
    pub interests: Vec<Interest>,
    pub traveler_type: Option<TravelerType>,
    pub price_ceiling: u8,
}

pub struct RelevanceScorer {
    catalog: Arc<Catalog>,
    pub weights: ScoringWeights,
}

impl RelevanceScorer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            weights: ScoringWeights::default(),
        }
    }

    pub fn with_weights(catalog: Arc<Catalog>, weights: ScoringWeights) -> Self {
        Self { catalog, weights }
    }

    /// Score a point against the traveler's criteria
    pub fn score(&self, point: &PointOfInterest, criteria: &ScoringCriteria) -> u32 {
        let raw = self.score_interests(point, criteria) + self.score_traveler_type(point, criteria);
        let penalized = raw.saturating_sub(self.price_penalty(point, criteria));
        self.apply_floor(penalized)
    }

    pub fn is_relevant(&self, score: u32) -> bool {
        score >= self.weights.minimum_score
    }

    fn score_interests(&self, point: &PointOfInterest, criteria: &ScoringCriteria) -> u32 {
        criteria
            .interests
            .iter()
            .filter_map(|interest| self.catalog.profile(*interest))
            .filter(|profile| profile.matches(&point.types))
            .count() as u32
            * self.weights.interest_match_boost
    }

    fn score_traveler_type(&self, point: &PointOfInterest, criteria: &ScoringCriteria) -> u32 {
        let Some(traveler_type) = criteria.traveler_type else {
            return 0;
        };

        self.catalog
            .traveler_weights(traveler_type)
            .iter()
            .filter(|(tag, _)| point.has_type(tag))
            .map(|(_, weight)| weight)
            .sum()
    }

    fn price_penalty(&self, point: &PointOfInterest, criteria: &ScoringCriteria) -> u32 {
        match point.price_level {
            Some(level) if level > criteria.price_ceiling => {
                u32::from(level - criteria.price_ceiling) * self.weights.over_budget_penalty
            }
            _ => 0,
        }
    }

    fn apply_floor(&self, score: u32) -> u32 {
        if score == 0 {
            self.weights.baseline_score
        } else if score < self.weights.weak_signal_floor {
            self.weights.weak_signal_floor
        } else {
            score
        }
    }
}
