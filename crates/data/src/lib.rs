//! Market data and static configuration for farm valuation.
//!
//! This crate provides:
//! - Price providers that resolve a token address to a USD price
//! - The built-in catalog of farms, price-feed ids and pegged tokens
//! - Loading of pool lists from JSON files

/// Built-in farm and token catalog.
pub mod catalog;
/// Price providers.
pub mod providers;

pub use catalog::CatalogError;
pub use providers::{
    CoinGeckoProvider, FallbackPriceProvider, PriceLookupFailure, PriceProvider,
    StaticPriceProvider,
};
