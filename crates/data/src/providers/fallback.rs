use super::{PriceLookupFailure, PriceProvider};
use async_trait::async_trait;
use farm_positions_domain::{Address, Price};
use std::sync::Arc;
use tracing::debug;

/// Consults providers in order and returns the first price found.
#[derive(Clone, Default)]
pub struct FallbackPriceProvider {
    sources: Vec<Arc<dyn PriceProvider>>,
}

impl FallbackPriceProvider {
    pub fn new(sources: Vec<Arc<dyn PriceProvider>>) -> Self {
        Self { sources }
    }

    pub fn with_source(mut self, source: Arc<dyn PriceProvider>) -> Self {
        self.sources.push(source);
        self
    }
}

#[async_trait]
impl PriceProvider for FallbackPriceProvider {
    fn name(&self) -> &str {
        "fallback"
    }

    /// Returns the last source's failure when none of them knows the price.
    async fn lookup(&self, token: &Address) -> Result<Price, PriceLookupFailure> {
        let mut last_error = PriceLookupFailure::Unmapped(*token);
        for source in &self.sources {
            match source.lookup(token).await {
                Ok(price) => return Ok(price),
                Err(error) => {
                    debug!(source = source.name(), token = %token, error = %error, "trying next price source");
                    last_error = error;
                }
            }
        }
        Err(last_error)
    }
}
