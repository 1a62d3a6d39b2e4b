use super::{PriceLookupFailure, PriceProvider};
use async_trait::async_trait;
use farm_positions_domain::{Address, Price};
use std::collections::HashMap;

/// Serves prices from a fixed table, e.g. for pegged stablecoins.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceProvider {
    prices: HashMap<Address, Price>,
}

impl StaticPriceProvider {
    pub fn new(prices: HashMap<Address, Price>) -> Self {
        Self { prices }
    }

    pub fn with_price(mut self, token: Address, price: Price) -> Self {
        self.prices.insert(token, price);
        self
    }
}

#[async_trait]
impl PriceProvider for StaticPriceProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn lookup(&self, token: &Address) -> Result<Price, PriceLookupFailure> {
        self.prices
            .get(token)
            .copied()
            .ok_or(PriceLookupFailure::Unmapped(*token))
    }
}
