//! Built-in PancakeSwap farms on BNB Smart Chain.
//!
//! The pool list is only a default. Callers may load their own with
//! [`load_pools`] and pass it to the valuation service instead.

use farm_positions_domain::{Address, Pool, Price};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// PancakeSwap MasterChef (v1).
pub const MASTERCHEF_ADDRESS: &str = "0x73feaa1eE314F8c655E354234017bE2193C9E24E";

pub const CAKE: &str = "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82";
pub const WBNB: &str = "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c";
pub const BUSD: &str = "0xe9e7CEA3DedcA5984780Bafc599bD69ADd087D56";
pub const USDT: &str = "0x55d398326f99059fF775485246999027B3197955";
pub const ETH: &str = "0x2170Ed0880ac9A755fd29B2688956BD959F933F8";
pub const BTCB: &str = "0x7130d2A12B9BCbFAe4f2634d864A1Ee1Ce3Ead9c";

/// (pool id, name, pair address, multiplier)
const DEFAULT_POOLS: [(u64, &str, &str, &str); 6] = [
    (251, "CAKE-BNB", "0x0eD7e52944161450477ee417DE9Cd3a859b14fD0", "40x"),
    (252, "BUSD-BNB", "0x58F876857a02D6762E0101bb5C46A8c1ED44Dc16", "10x"),
    (389, "CAKE-BUSD", "0x804678fa97d91B974ec2af3c843270886528a9E6", "10x"),
    (258, "USDT-BUSD", "0x7EFaEf62fDdCCa950418312c6C91Aef321375A00", "2x"),
    (261, "ETH-BNB", "0x74E4716E431f45807DCF19f284c7aA99F18a4fbc", "4x"),
    (262, "BTCB-BNB", "0x61EB789d75A95CAa3fF50ed7E47b96c132fEc082", "4x"),
];

const PRICE_FEEDS: [(&str, &str); 6] = [
    (CAKE, "pancakeswap-token"),
    (WBNB, "wbnb"),
    (BUSD, "binance-usd"),
    (USDT, "tether"),
    (ETH, "ethereum"),
    (BTCB, "binance-bitcoin"),
];

/// Errors loading a pool list.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read pool file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid pool file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("pool file contains no pools")]
    Empty,
}

/// Parses one of the address constants above.
///
/// # Panics
/// Panics if a catalog constant is malformed.
fn known(address: &str) -> Address {
    address.parse().expect("valid catalog address")
}

/// The MasterChef contract address.
#[must_use]
pub fn masterchef_address() -> Address {
    known(MASTERCHEF_ADDRESS)
}

/// The CAKE token, in which MasterChef pays rewards.
#[must_use]
pub fn reward_token() -> Address {
    known(CAKE)
}

/// Farms valued when no pool file is given.
#[must_use]
pub fn default_pools() -> Vec<Pool> {
    DEFAULT_POOLS
        .iter()
        .map(|(id, name, pair, multiplier)| Pool {
            multiplier: Some((*multiplier).to_string()),
            ..Pool::new(*id, *name, known(pair))
        })
        .collect()
}

/// CoinGecko ids of the catalog tokens.
#[must_use]
pub fn price_feed_ids() -> HashMap<Address, String> {
    PRICE_FEEDS
        .iter()
        .map(|(token, id)| (known(token), (*id).to_string()))
        .collect()
}

/// Stablecoins quoted at one dollar when no live price is available.
#[must_use]
pub fn pegged_prices() -> HashMap<Address, Price> {
    [BUSD, USDT]
        .into_iter()
        .map(|token| (known(token), Price(Decimal::ONE)))
        .collect()
}

/// Parses a JSON array of pools.
///
/// # Errors
/// Returns an error if the JSON is invalid or holds no pools.
pub fn parse_pools(json: &str) -> Result<Vec<Pool>, CatalogError> {
    let pools: Vec<Pool> = serde_json::from_str(json)?;
    if pools.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(pools)
}

/// Reads a JSON array of pools from `path`.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or is empty.
pub fn load_pools(path: impl AsRef<Path>) -> Result<Vec<Pool>, CatalogError> {
    let json = std::fs::read_to_string(path)?;
    parse_pools(&json)
}
