//! Turns a raw search result into a [`PointOfInterest`].
//!
//! Duration and time-of-day are inferred from the place's category tags. A few
//! categories pick from a small range at random so that otherwise identical
//! places do not always land in the same slot; pass a seeded RNG to pin them.

use rand::Rng;

use crate::models::{
    place::RawPlace,
    point::{CostBucket, DayPeriod, PointOfInterest},
};
use crate::services::catalog::Catalog;

const DEFAULT_NAME: &str = "Ponto Desconhecido";
const DEFAULT_DURATION_HOURS: u8 = 2;

const CULTURE_TYPES: &[&str] = &["museum", "art_gallery", "historic_site"];
const LONG_VISIT_TYPES: &[&str] = &["shopping_mall", "amusement_park", "park", "zoo"];
const OUTDOOR_TYPES: &[&str] = &["beach", "natural_feature"];
const QUICK_STOP_TYPES: &[&str] = &["restaurant", "food", "bar", "night_club"];

const NIGHTLIFE_TYPES: &[&str] = &["night_club", "bar"];
const DINING_TYPES: &[&str] = &["restaurant", "food", "cafe"];
const DINNER_TYPES: &[&str] = &["restaurant", "food"];
const FULL_DAY_TYPES: &[&str] = &["amusement_park"];

/// Returns `None` when the place has no `place_id`; such records cannot be
/// tracked across days and are dropped.
pub fn normalize<R: Rng + ?Sized>(
    place: &RawPlace,
    catalog: &Catalog,
    rng: &mut R,
) -> Option<PointOfInterest> {
    let place_id = place.place_id.clone()?;

    let interests = catalog
        .interests()
        .iter()
        .filter(|profile| profile.matches(&place.types))
        .map(|profile| profile.interest)
        .collect();

    let duration_hours = infer_duration(place, rng);
    let best_periods = infer_periods(place, rng);

    Some(PointOfInterest {
        place_id,
        name: place
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_NAME.to_string()),
        types: place.types.clone(),
        price_level: place.price_level,
        interests,
        duration_hours,
        cost: CostBucket::from_price_level(place.price_level),
        price_label: catalog.price_label(place.price_level).to_string(),
        best_periods,
    })
}

// Later groups win when a place carries tags from several of them.
fn infer_duration<R: Rng + ?Sized>(place: &RawPlace, rng: &mut R) -> u8 {
    let mut hours = DEFAULT_DURATION_HOURS;
    if place.has_any_type(CULTURE_TYPES) {
        hours = rng.gen_range(2..=3);
    }
    if place.has_any_type(LONG_VISIT_TYPES) {
        hours = rng.gen_range(3..=5);
    }
    if place.has_any_type(OUTDOOR_TYPES) {
        hours = rng.gen_range(3..=4);
    }
    if place.has_any_type(QUICK_STOP_TYPES) {
        hours = rng.gen_range(1..=2);
    }
    hours
}

fn infer_periods<R: Rng + ?Sized>(place: &RawPlace, rng: &mut R) -> Vec<DayPeriod> {
    let mut periods = vec![DayPeriod::Morning, DayPeriod::Afternoon];

    if place.has_any_type(NIGHTLIFE_TYPES) {
        periods = vec![DayPeriod::Evening];
    }
    if place.has_any_type(DINING_TYPES) {
        periods = if rng.gen_bool(0.5) {
            vec![DayPeriod::Morning, DayPeriod::Afternoon]
        } else {
            vec![DayPeriod::Afternoon, DayPeriod::Evening]
        };
    }
    if place.has_any_type(DINNER_TYPES)
        && place.has_type("dinner")
        && !periods.contains(&DayPeriod::Evening)
    {
        periods.push(DayPeriod::Evening);
    }
    if place.has_any_type(FULL_DAY_TYPES) {
        periods = vec![DayPeriod::FullDay];
    }

    periods
}
