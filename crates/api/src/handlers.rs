//! Request handlers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use farm_positions_domain::PortfolioSummary;
use serde::Serialize;
use tracing::info;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Number of configured pools.
    pub pools: usize,
}

/// Valuation of one wallet.
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    /// Address as given in the request path.
    pub address: String,
    pub summary: PortfolioSummary,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        pools: state.pools.len(),
    })
}

/// `GET /wallet/{address}`
pub async fn wallet(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<WalletResponse>, ApiError> {
    info!(address = %address, "wallet valuation requested");
    let summary = state.service.summarize(&address, &state.pools).await?;
    Ok(Json(WalletResponse { address, summary }))
}
