//! Error types for the pokemon caching service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Pokemon Error Enum ==
/// Unified error type for the service.
///
/// The cache itself never produces errors (absence is `None`); everything
/// here originates from input validation or the upstream API.
#[derive(Error, Debug)]
pub enum PokemonError {
    /// Upstream answered 404 for the requested pokemon
    #[error("pokemon not found")]
    NotFound,

    /// Caller-supplied id was not numeric
    #[error("invalid pokemon id: {0}")]
    InvalidInput(String),

    /// Transport-level failure reaching the upstream API (timeout, DNS,
    /// connection refused)
    #[error("pokeapi unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream answered with a non-success status, or a success status
    /// with a body that failed structural decoding
    #[error("upstream error: {message}")]
    Upstream { status: u16, message: String },

    /// Unexpected programming fault
    #[error("internal error: {0}")]
    Internal(String),
}

impl PokemonError {
    /// Upstream error for a non-success status code.
    pub fn upstream_status(status: u16) -> Self {
        Self::Upstream {
            status,
            message: format!("api returned status {status}"),
        }
    }

    /// Upstream error for a well-statused response whose body failed to
    /// decode.
    pub fn malformed_payload(status: u16, detail: impl std::fmt::Display) -> Self {
        Self::Upstream {
            status,
            message: format!("failed to decode response: {detail}"),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for PokemonError {
    fn into_response(self) -> Response {
        let (status, label) = match &self {
            PokemonError::NotFound => (StatusCode::NOT_FOUND, "Pokemon not found"),
            PokemonError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid pokemon data"),
            PokemonError::UpstreamUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "PokeAPI service unavailable")
            }
            PokemonError::Upstream { .. } | PokemonError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(ErrorResponse::new(label, self.to_string(), status.as_u16()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, PokemonError>;
