//! Static lookup tables for the itinerary engine.
//!
//! Everything here is built once at startup and shared read-only between
//! requests: interest → category tags and search templates, traveler type →
//! category weights, and price tier → label.

use crate::models::point::{Interest, TravelerType};

/// Placeholder replaced by the destination in every query template
const DESTINATION: &str = "{destino}";

const GENERAL_QUERIES: &[&str] = &[
    "atrações turísticas em {destino}",
    "melhores lugares para visitar em {destino}",
    "pontos turísticos em {destino}",
];

const PRICE_LABELS: [&str; 5] = ["Grátis", "Barato", "Moderado", "Caro", "Muito Caro"];
const UNKNOWN_PRICE_LABEL: &str = "Não Informado";

#[derive(Debug, Clone)]
pub enum QueryTemplates {
    /// Hand-written searches for the destination
    Fixed(&'static [&'static str]),
    /// One "<tag> em <destino>" search per category tag
    PerCategory,
}

#[derive(Debug, Clone)]
pub struct InterestProfile {
    pub interest: Interest,
    pub categories: &'static [&'static str],
    pub templates: QueryTemplates,
    /// Sparse categories are searched without a max price so they are not
    /// filtered down to nothing
    pub price_filtered: bool,
}

impl InterestProfile {
    fn per_category(interest: Interest, categories: &'static [&'static str]) -> Self {
        Self {
            interest,
            categories,
            templates: QueryTemplates::PerCategory,
            price_filtered: true,
        }
    }

    fn fixed(
        interest: Interest,
        categories: &'static [&'static str],
        templates: &'static [&'static str],
        price_filtered: bool,
    ) -> Self {
        Self {
            interest,
            categories,
            templates: QueryTemplates::Fixed(templates),
            price_filtered,
        }
    }

    pub fn matches(&self, types: &[String]) -> bool {
        self.categories
            .iter()
            .any(|category| types.iter().any(|t| t == category))
    }

    /// Query texts for this interest at the given destination
    pub fn queries(&self, destination: &str) -> Vec<String> {
        match &self.templates {
            QueryTemplates::Fixed(templates) => templates
                .iter()
                .map(|template| template.replace(DESTINATION, destination))
                .collect(),
            QueryTemplates::PerCategory => self
                .categories
                .iter()
                .map(|category| format!("{} em {}", category.replace('_', " "), destination))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TravelerWeights {
    pub traveler_type: TravelerType,
    pub weights: &'static [(&'static str, u32)],
}

#[derive(Debug, Clone)]
pub struct Catalog {
    interests: Vec<InterestProfile>,
    traveler_weights: Vec<TravelerWeights>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub fn standard() -> Self {
        use Interest::*;

        let interests = vec![
            InterestProfile::fixed(
                Praias,
                &["beach", "natural_feature"],
                &[
                    "praias em {destino}",
                    "orla de {destino}",
                    "piscinas naturais em {destino}",
                ],
                true,
            ),
            InterestProfile::fixed(
                Museus,
                &["museum", "art_gallery"],
                &[
                    "museu {destino}",
                    "galeria de arte {destino}",
                    "centro cultural {destino}",
                    "sítio histórico {destino}",
                    "casa de cultura {destino}",
                    "atrações culturais em {destino}",
                ],
                false,
            ),
            InterestProfile::per_category(Trilhas, &["park", "natural_feature", "point_of_interest"]),
            InterestProfile::per_category(VidaNoturna, &["night_club", "bar"]),
            InterestProfile::per_category(Compras, &["shopping_mall", "store", "department_store"]),
            InterestProfile::fixed(
                Gastronomia,
                &["restaurant", "food", "cafe", "bakery"],
                &[
                    "melhores restaurantes em {destino}",
                    "bares e restaurantes em {destino}",
                    "cafes em {destino}",
                    "padarias e docerias em {destino}",
                ],
                true,
            ),
            InterestProfile::per_category(
                Monumentos,
                &["point_of_interest", "tourist_attraction", "historic_site"],
            ),
            InterestProfile::fixed(
                Historia,
                &["historic_site", "museum", "church", "synagogue", "hindu_temple", "mosque"],
                &[
                    "pontos históricos em {destino}",
                    "igrejas históricas em {destino}",
                    "monumentos históricos em {destino}",
                ],
                false,
            ),
            InterestProfile::per_category(
                Fotografia,
                &["tourist_attraction", "point_of_interest", "park", "natural_feature"],
            ),
            InterestProfile::per_category(Relax, &["spa", "park", "beach", "beauty_salon"]),
            InterestProfile::per_category(Romance, &["restaurant", "point_of_interest", "park", "bar"]),
            InterestProfile::per_category(Arte, &["art_gallery", "museum"]),
            InterestProfile::per_category(Parques, &["amusement_park", "park", "zoo"]),
            InterestProfile::per_category(
                Diversao,
                &["amusement_park", "park", "aquarium", "bowling_alley", "movie_theater"],
            ),
            InterestProfile::fixed(
                Natureza,
                &["natural_feature", "park"],
                &[
                    "parques naturais em {destino}",
                    "reservas ecológicas em {destino}",
                    "trilhas em {destino}",
                    "jardins botânicos em {destino}",
                ],
                true,
            ),
            InterestProfile::per_category(Aventura, &["park", "natural_feature", "amusement_park"]),
        ];

        let traveler_weights = vec![
            TravelerWeights {
                traveler_type: TravelerType::Familia,
                weights: &[
                    ("park", 4),
                    ("amusement_park", 5),
                    ("zoo", 4),
                    ("aquarium", 4),
                    ("museum", 3),
                    ("beach", 3),
                ],
            },
            TravelerWeights {
                traveler_type: TravelerType::Aventureiro,
                weights: &[
                    ("natural_feature", 5),
                    ("park", 4),
                    ("beach", 4),
                    ("night_club", 3),
                    ("bar", 3),
                ],
            },
            TravelerWeights {
                traveler_type: TravelerType::Cultural,
                weights: &[
                    ("museum", 5),
                    ("art_gallery", 4),
                    ("historic_site", 4),
                    ("point_of_interest", 3),
                ],
            },
            TravelerWeights {
                traveler_type: TravelerType::Gastronomico,
                weights: &[("restaurant", 6), ("food", 5), ("cafe", 4), ("bakery", 3)],
            },
            TravelerWeights {
                traveler_type: TravelerType::Casais,
                weights: &[
                    ("restaurant", 4),
                    ("point_of_interest", 4),
                    ("park", 3),
                    ("bar", 3),
                    ("spa", 3),
                ],
            },
            TravelerWeights {
                traveler_type: TravelerType::Relax,
                weights: &[("spa", 5), ("park", 4), ("beach", 4), ("beauty_salon", 3)],
            },
        ];

        Self {
            interests,
            traveler_weights,
        }
    }

    /// Profiles in table order; interest inference follows this order
    pub fn interests(&self) -> &[InterestProfile] {
        &self.interests
    }

    pub fn profile(&self, interest: Interest) -> Option<&InterestProfile> {
        self.interests.iter().find(|p| p.interest == interest)
    }

    pub fn traveler_weights(&self, traveler_type: TravelerType) -> &[(&'static str, u32)] {
        self.traveler_weights
            .iter()
            .find(|w| w.traveler_type == traveler_type)
            .map(|w| w.weights)
            .unwrap_or(&[])
    }

    pub fn price_label(&self, price_level: Option<u8>) -> &'static str {
        price_level
            .and_then(|level| PRICE_LABELS.get(level as usize))
            .copied()
            .unwrap_or(UNKNOWN_PRICE_LABEL)
    }

    pub fn general_queries(&self, destination: &str) -> Vec<String> {
        GENERAL_QUERIES
            .iter()
            .map(|template| template.replace(DESTINATION, destination))
            .collect()
    }
}
