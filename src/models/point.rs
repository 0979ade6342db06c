use serde::{Deserialize, Serialize};

/// Interest vocabulary accepted from the front end. Keys are kept in the
/// language the client sends them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interest {
    Praias,
    Museus,
    Trilhas,
    VidaNoturna,
    Compras,
    Gastronomia,
    Monumentos,
    Historia,
    Fotografia,
    Relax,
    Romance,
    Arte,
    Parques,
    Diversao,
    Natureza,
    Aventura,
}

impl Interest {
    pub const ALL: [Interest; 16] = [
        Interest::Praias,
        Interest::Museus,
        Interest::Trilhas,
        Interest::VidaNoturna,
        Interest::Compras,
        Interest::Gastronomia,
        Interest::Monumentos,
        Interest::Historia,
        Interest::Fotografia,
        Interest::Relax,
        Interest::Romance,
        Interest::Arte,
        Interest::Parques,
        Interest::Diversao,
        Interest::Natureza,
        Interest::Aventura,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Interest::Praias => "praias",
            Interest::Museus => "museus",
            Interest::Trilhas => "trilhas",
            Interest::VidaNoturna => "vida-noturna",
            Interest::Compras => "compras",
            Interest::Gastronomia => "gastronomia",
            Interest::Monumentos => "monumentos",
            Interest::Historia => "historia",
            Interest::Fotografia => "fotografia",
            Interest::Relax => "relax",
            Interest::Romance => "romance",
            Interest::Arte => "arte",
            Interest::Parques => "parques",
            Interest::Diversao => "diversao",
            Interest::Natureza => "natureza",
            Interest::Aventura => "aventura",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelerType {
    Familia,
    Aventureiro,
    Cultural,
    Gastronomico,
    Casais,
    Relax,
}

impl TravelerType {
    /// Unknown keys yield `None` and the traveler weighting is skipped
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "familia" => Some(TravelerType::Familia),
            "aventureiro" => Some(TravelerType::Aventureiro),
            "cultural" => Some(TravelerType::Cultural),
            "gastronomico" => Some(TravelerType::Gastronomico),
            "casais" => Some(TravelerType::Casais),
            "relax" => Some(TravelerType::Relax),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostBucket {
    Unknown,
    Low,
    Medium,
    High,
}

impl CostBucket {
    pub fn from_price_level(price_level: Option<u8>) -> Self {
        match price_level {
            None => CostBucket::Unknown,
            Some(level) if level >= 3 => CostBucket::High,
            Some(2) => CostBucket::Medium,
            Some(_) => CostBucket::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    FullDay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointOfInterest {
    pub place_id: String,
    pub name: String,
    pub types: Vec<String>,
    pub price_level: Option<u8>,
    pub interests: Vec<Interest>,
    pub duration_hours: u8,
    pub cost: CostBucket,
    pub price_label: String,
    pub best_periods: Vec<DayPeriod>,
}

impl PointOfInterest {
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    pub fn suits(&self, period: DayPeriod) -> bool {
        self.best_periods.contains(&period)
    }
}

/// A normalized point paired with the relevance score it received while the
/// candidate pool was built. The score is never recomputed.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPoint {
    pub point: PointOfInterest,
    pub score: u32,
}
