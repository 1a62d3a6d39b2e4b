//! Price providers.
//!
//! Resolution never fails the caller: [`PriceProvider::price_usd`] turns
//! every lookup failure into `None`, which values the token at zero.

mod coingecko;
mod fallback;
mod fixed;

pub use coingecko::{CoinGeckoProvider, DEFAULT_COINGECKO_URL};
pub use fallback::FallbackPriceProvider;
pub use fixed::StaticPriceProvider;

use async_trait::async_trait;
use farm_positions_domain::{Address, Price};
use thiserror::Error;
use tracing::warn;

/// Why a price could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceLookupFailure {
    /// No price feed id is mapped for the token.
    #[error("no price feed mapped for {0}")]
    Unmapped(Address),
    /// The feed could not be reached or answered with an error status.
    #[error("price feed request failed: {0}")]
    Http(String),
    /// The feed answered without a USD quote for the id.
    #[error("price feed has no USD quote for {0:?}")]
    MissingQuote(String),
    /// The quote is not a non-negative decimal.
    #[error("unusable price quote {0:?}")]
    Parse(String),
}

/// Source of USD prices for tokens.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Looks up the price of `token`, reporting why it is unknown.
    async fn lookup(&self, token: &Address) -> Result<Price, PriceLookupFailure>;

    /// Price of `token`, or `None` if it cannot be resolved.
    ///
    /// Never fails: an unknown price is logged and reported as absent, so
    /// one unpriced token cannot block a whole valuation.
    async fn price_usd(&self, token: &Address) -> Option<Price> {
        match self.lookup(token).await {
            Ok(price) => Some(price),
            Err(error) => {
                warn!(
                    provider = self.name(),
                    token = %token,
                    error = %error,
                    "price unavailable, valuing token at zero"
                );
                None
            }
        }
    }
}
