//! Wallet valuation across MasterChef farms.
//!
//! This crate ties chain reads and prices together:
//! - Resolving a pair into its tokens, reserves and prices
//! - Valuing a wallet's stake in every configured pool concurrently
//! - The request entry point that validates input, pins a block and ranks

/// Pair decomposition.
pub mod composition;
/// Per-pool stake valuation.
pub mod aggregator;
/// Error types.
pub mod error;
/// Prelude module for convenient imports.
pub mod prelude;
/// Request entry point.
pub mod service;

pub use aggregator::{AggregatorConfig, StakingAggregator};
pub use composition::CompositionResolver;
pub use error::{PoolError, PortfolioError};
pub use service::{PortfolioService, ServiceConfig};
