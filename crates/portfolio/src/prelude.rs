//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use farm_positions_portfolio::prelude::*;
//! ```

pub use crate::aggregator::{AggregatorConfig, StakingAggregator};
pub use crate::composition::CompositionResolver;
pub use crate::error::{PoolError, PortfolioError};
pub use crate::service::{PortfolioService, ServiceConfig};
pub use farm_positions_domain::{PortfolioSummary, Position, Valuation};
