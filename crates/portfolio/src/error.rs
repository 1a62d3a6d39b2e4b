//! Error types for portfolio valuation.

use farm_positions_domain::{CompositionError, InvalidInputError, UnresolvedKind};
use farm_positions_protocols::ChainCallError;
use std::time::Duration;
use thiserror::Error;

/// Failure of a whole valuation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    /// Rejected before touching the chain.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    /// The snapshot block could not be read.
    #[error("chain endpoint unavailable: {0}")]
    ChainUnavailable(ChainCallError),
    /// The request did not finish in time.
    #[error("valuation timed out after {0:?}")]
    Timeout(Duration),
}

/// Why a single pool could not be valued. Never aborts the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error(transparent)]
    Chain(#[from] ChainCallError),
    #[error(transparent)]
    Composition(#[from] CompositionError),
}

impl PoolError {
    /// Marker kind recorded on the unresolved position.
    #[must_use]
    pub fn kind(&self) -> UnresolvedKind {
        match self {
            Self::Chain(_) => UnresolvedKind::ChainCall,
            Self::Composition(_) => UnresolvedKind::Composition,
        }
    }
}
