use super::{PriceLookupFailure, PriceProvider};
use async_trait::async_trait;
use farm_positions_domain::{Address, Price};
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::value::RawValue;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Public CoinGecko API root.
pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";

/// `/simple/price` response: feed id -> currency -> quote.
///
/// Quotes stay as their literal JSON text so they never pass through `f64`.
type SimplePriceResponse = HashMap<String, HashMap<String, Box<RawValue>>>;

/// USD prices from CoinGecko's simple price endpoint.
///
/// Tokens are mapped to CoinGecko ids up front. Unmapped tokens are
/// answered without any network call.
#[derive(Debug, Clone)]
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
    feed_ids: HashMap<Address, String>,
}

impl CoinGeckoProvider {
    /// Creates a new provider.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        feed_ids: HashMap<Address, String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            feed_ids,
        })
    }

    /// CoinGecko id mapped for `token`.
    pub fn feed_id(&self, token: &Address) -> Option<&str> {
        self.feed_ids.get(token).map(String::as_str)
    }

    async fn fetch(&self, ids: &[&str]) -> Result<SimplePriceResponse, PriceLookupFailure> {
        let url = format!("{}/simple/price", self.base_url);
        debug!(ids = ?ids, "requesting prices");

        let response = self
            .client
            .get(&url)
            .query(&[("ids", ids.join(",")), ("vs_currencies", "usd".to_string())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| PriceLookupFailure::Http(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| PriceLookupFailure::Http(e.to_string()))
    }

    /// Prices for several tokens in one request.
    ///
    /// Tokens that are unmapped or missing from the answer are left out.
    /// Any request failure yields an empty map.
    pub async fn prices_usd(&self, tokens: &[Address]) -> HashMap<Address, Price> {
        let mapped: Vec<(Address, &str)> = tokens
            .iter()
            .filter_map(|t| self.feed_id(t).map(|id| (*t, id)))
            .collect();
        if mapped.is_empty() {
            return HashMap::new();
        }

        let mut ids: Vec<&str> = mapped.iter().map(|(_, id)| *id).collect();
        ids.sort_unstable();
        ids.dedup();

        let response = match self.fetch(&ids).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(error = %error, "batch price request failed");
                return HashMap::new();
            }
        };

        mapped
            .into_iter()
            .filter_map(|(token, id)| usd_quote(&response, id).ok().map(|p| (token, p)))
            .collect()
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "coingecko"
    }

    async fn lookup(&self, token: &Address) -> Result<Price, PriceLookupFailure> {
        let id = self
            .feed_id(token)
            .ok_or(PriceLookupFailure::Unmapped(*token))?;
        let response = self.fetch(&[id]).await?;
        usd_quote(&response, id)
    }
}

/// Extracts the USD quote for `id` without going through binary floats.
fn usd_quote(response: &SimplePriceResponse, id: &str) -> Result<Price, PriceLookupFailure> {
    let quote = response
        .get(id)
        .and_then(|currencies| currencies.get("usd"))
        .ok_or_else(|| PriceLookupFailure::MissingQuote(id.to_string()))?;

    let text = quote.get().trim();
    let value = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| PriceLookupFailure::Parse(text.to_string()))?;

    Price::new(value).ok_or_else(|| PriceLookupFailure::Parse(text.to_string()))
}
