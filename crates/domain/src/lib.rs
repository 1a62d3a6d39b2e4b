//! Domain model for MasterChef farm position valuation.
//!
//! This crate holds the request-scoped value objects shared by every other
//! crate in the workspace:
//! - Addresses, raw token amounts and USD prices
//! - Pools and pair (LP) compositions
//! - Per-pool positions and the ranked portfolio summary
//!
//! Everything here is pure and synchronous. Network access lives in the
//! protocol and data crates.

/// Wallet and contract addresses.
pub mod address;
/// Domain error types.
pub mod error;
/// Display helpers.
pub mod format;
/// Exact fixed-point conversions.
pub mod math;
/// Farm pools and pair compositions.
pub mod pool;
/// Ranking and summarization.
pub mod portfolio;
/// Per-pool positions.
pub mod position;
/// Token amounts, prices and metadata.
pub mod token;

pub use address::Address;
pub use error::{CompositionError, InvalidInputError};
pub use pool::{PairComposition, Pool};
pub use portfolio::{PortfolioSummary, rank};
pub use position::{Holding, PendingReward, Position, PositionValue, UnresolvedKind, Valuation};
pub use token::{Price, TokenAmount, TokenInfo};
