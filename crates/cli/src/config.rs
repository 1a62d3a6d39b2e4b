//! Configuration loaded from the environment.

use anyhow::{Context, Result};
use farm_positions_data::catalog;
use farm_positions_data::providers::DEFAULT_COINGECKO_URL;
use farm_positions_domain::Address;
use farm_positions_protocols::abis::PENDING_CAKE;
use farm_positions_protocols::rpc::DEFAULT_RPC_URL;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Runtime configuration of the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    pub masterchef_address: Address,
    /// JSON ABI replacing the built-in MasterChef descriptor.
    pub masterchef_abi_file: Option<PathBuf>,
    /// `None` disables pending reward reads.
    pub pending_reward_method: Option<String>,
    pub reward_token: Option<Address>,
    pub coingecko_url: String,
    /// JSON pool list replacing the built-in catalog.
    pub pools_file: Option<PathBuf>,
    pub rpc_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_concurrent_pools: usize,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            masterchef_address: catalog::masterchef_address(),
            masterchef_abi_file: None,
            pending_reward_method: Some(PENDING_CAKE.to_string()),
            reward_token: Some(catalog::reward_token()),
            coingecko_url: DEFAULT_COINGECKO_URL.to_string(),
            pools_file: None,
            rpc_timeout_secs: 10,
            request_timeout_secs: 30,
            max_concurrent_pools: 8,
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Reads the process environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = var("RPC_URL") {
            config.rpc_url = url;
        }
        if let Some(address) = var("MASTERCHEF_ADDRESS") {
            config.masterchef_address = parse("MASTERCHEF_ADDRESS", &address)?;
        }
        config.masterchef_abi_file = var("MASTERCHEF_ABI_FILE").map(PathBuf::from);
        // Set but empty disables reward reads.
        if let Some(method) = lookup("PENDING_REWARD_METHOD") {
            config.pending_reward_method = Some(method.trim().to_string()).filter(|m| !m.is_empty());
        }
        if let Some(token) = lookup("REWARD_TOKEN") {
            config.reward_token = match token.trim() {
                "" => None,
                token => Some(parse("REWARD_TOKEN", token)?),
            };
        }
        if let Some(url) = var("COINGECKO_API_URL") {
            config.coingecko_url = url;
        }
        config.pools_file = var("POOLS_FILE").map(PathBuf::from);
        if let Some(value) = var("RPC_TIMEOUT_SECS") {
            config.rpc_timeout_secs = parse("RPC_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = var("REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = parse("REQUEST_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = var("MAX_CONCURRENT_POOLS") {
            config.max_concurrent_pools = parse("MAX_CONCURRENT_POOLS", &value)?;
        }
        if let Some(value) = var("PORT") {
            config.port = parse("PORT", &value)?;
        }

        Ok(config)
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid {key}: {value:?}"))
}
