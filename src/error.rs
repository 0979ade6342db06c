use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned to the client. `mensagem` is what the web client shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub mensagem: String,
    pub codigo: String,
}

#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("Erro: Chave de API do Google não configurada no backend.")]
    MissingApiKey,
    #[error("Formato de data inválido.")]
    InvalidDate,
    #[error("A data final da viagem deve ser igual ou posterior à data inicial.")]
    InvalidDateRange,
    #[error("A viagem pode ter no máximo {0} dias.")]
    TripTooLong(u32),
    #[error("Orçamento inválido. Informe um valor numérico maior ou igual a zero.")]
    InvalidBudget,
    #[error("Requisição inválida: {0}")]
    BadRequest(String),
    #[error("Não foi possível encontrar coordenadas para o destino '{0}'.")]
    DestinationNotFound(String),
    #[error("Não foram encontrados pontos de interesse para '{0}' com os critérios fornecidos. Tente interesses diferentes ou um orçamento maior.")]
    NoPointsFound(String),
    #[error("Não foram encontrados pontos de interesse relevantes para '{0}' com os critérios fornecidos (após pontuação). Tente interesses diferentes ou um orçamento maior.")]
    NoRelevantPoints(String),
}

impl ItineraryError {
    pub fn code(&self) -> &'static str {
        match self {
            ItineraryError::MissingApiKey => "MISSING_API_KEY",
            ItineraryError::InvalidDate => "INVALID_DATE",
            ItineraryError::InvalidDateRange => "INVALID_DATE_RANGE",
            ItineraryError::TripTooLong(_) => "TRIP_TOO_LONG",
            ItineraryError::InvalidBudget => "INVALID_BUDGET",
            ItineraryError::BadRequest(_) => "BAD_REQUEST",
            ItineraryError::DestinationNotFound(_) => "DESTINATION_NOT_FOUND",
            ItineraryError::NoPointsFound(_) => "NO_POINTS_FOUND",
            ItineraryError::NoRelevantPoints(_) => "NO_RELEVANT_POINTS",
        }
    }
}

impl ResponseError for ItineraryError {
    fn status_code(&self) -> StatusCode {
        match self {
            ItineraryError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            ItineraryError::InvalidDate
            | ItineraryError::InvalidDateRange
            | ItineraryError::TripTooLong(_)
            | ItineraryError::InvalidBudget
            | ItineraryError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ItineraryError::DestinationNotFound(_)
            | ItineraryError::NoPointsFound(_)
            | ItineraryError::NoRelevantPoints(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            mensagem: self.to_string(),
            codigo: self.code().to_string(),
        })
    }
}
