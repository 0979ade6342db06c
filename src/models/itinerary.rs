use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/generate_roteiro`. Field names match what the web client
/// already sends.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ItineraryRequest {
    #[serde(rename = "destino", default)]
    pub destination: String,
    #[serde(rename = "dataInicio")]
    pub start_date: Option<String>,
    #[serde(rename = "dataFim")]
    pub end_date: Option<String>,
    #[serde(rename = "orcamento", default, deserialize_with = "deserialize_budget")]
    pub budget: Option<f64>,
    #[serde(rename = "tipoViajante")]
    pub traveler_type: Option<String>,
    #[serde(rename = "interesses", default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    #[serde(rename = "dia")]
    pub day: u32,
    #[serde(rename = "atividades")]
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryResponse {
    #[serde(rename = "roteiro")]
    pub days: Vec<ScheduleDay>,
    #[serde(rename = "sugestao_orcamento")]
    pub budget_advice: String,
}

// Budget may arrive as a number or as the raw text of a form field
fn deserialize_budget<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => Ok(s.trim().replace(',', ".").parse().ok()),
        _ => Ok(None),
    }
}
