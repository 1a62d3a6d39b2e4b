//! API error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use farm_positions_portfolio::PortfolioError;
use thiserror::Error;
use tracing::warn;

/// Errors returned by API handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed address or empty pool configuration.
    #[error("{0}")]
    InvalidInput(String),
    /// The chain endpoint could not be reached.
    #[error("{0}")]
    ChainUnavailable(String),
    /// The valuation did not finish in time.
    #[error("{0}")]
    Timeout(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::ChainUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<PortfolioError> for ApiError {
    fn from(error: PortfolioError) -> Self {
        let message = error.to_string();
        match error {
            PortfolioError::InvalidInput(_) => Self::InvalidInput(message),
            PortfolioError::ChainUnavailable(_) => Self::ChainUnavailable(message),
            PortfolioError::Timeout(_) => Self::Timeout(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self, "request failed");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}
