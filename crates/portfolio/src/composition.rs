use crate::error::PoolError;
use farm_positions_data::PriceProvider;
use farm_positions_domain::{Address, CompositionError, PairComposition, Price, TokenInfo};
use farm_positions_protocols::contracts::{Erc20, PairContract};
use farm_positions_protocols::{BlockTag, ChainCallError, ChainReader};
use futures::{join, try_join};
use tracing::debug;

/// Reads a pair's tokens, reserves and supply, and prices both tokens.
///
/// All reads happen at the given block, so reserves and supply are
/// mutually consistent. An address that does not answer the pair interface
/// fails with [`CompositionError::InvalidPair`]; nothing is guessed.
#[derive(Debug, Clone, Default)]
pub struct CompositionResolver {
    pair: PairContract,
    erc20: Erc20,
}

impl CompositionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the composition of `pair` at `block`.
    ///
    /// Missing symbols and prices are tolerated. Missing decimals are not.
    ///
    /// # Errors
    /// Returns [`PoolError::Composition`] when `pair` is not a pair contract,
    /// and [`PoolError::Chain`] for any other failed read.
    pub async fn resolve<R, P>(
        &self,
        reader: &R,
        prices: &P,
        pair: &Address,
        block: BlockTag,
    ) -> Result<PairComposition, PoolError>
    where
        R: ChainReader + ?Sized,
        P: PriceProvider + ?Sized,
    {
        let (token0, token1, reserves, total_supply, decimals) = try_join!(
            self.pair.token0(reader, pair, block),
            self.pair.token1(reader, pair, block),
            self.pair.reserves(reader, pair, block),
            self.pair.total_supply(reader, pair, block),
            self.pair.decimals(reader, pair, block),
        )
        .map_err(|e| pair_error(pair, e))?;

        let (decimals0, decimals1) = try_join!(
            self.erc20.decimals(reader, &token0, block),
            self.erc20.decimals(reader, &token1, block),
        )?;

        let (symbol0, symbol1, price0, price1) = join!(
            self.erc20.symbol(reader, &token0, block),
            self.erc20.symbol(reader, &token1, block),
            prices.price_usd(&token0),
            prices.price_usd(&token1),
        );

        debug!(
            pair = %pair,
            token0 = %token0,
            token1 = %token1,
            priced0 = price0.is_some(),
            priced1 = price1.is_some(),
            "resolved pair"
        );

        Ok(PairComposition {
            pair: *pair,
            decimals,
            token0: token_info(token0, decimals0, symbol0.ok(), price0),
            token1: token_info(token1, decimals1, symbol1.ok(), price1),
            reserve0: reserves.reserve0,
            reserve1: reserves.reserve1,
            total_supply,
        })
    }
}

fn token_info(
    address: Address,
    decimals: u8,
    symbol: Option<String>,
    price: Option<Price>,
) -> TokenInfo {
    let info = TokenInfo::new(address, decimals).with_price(price);
    match symbol.filter(|s| !s.is_empty()) {
        Some(symbol) => info.with_symbol(symbol),
        None => info,
    }
}

/// A reverted or undecodable pair read means the address is not a pair.
fn pair_error(pair: &Address, error: ChainCallError) -> PoolError {
    if error.is_interface_mismatch() {
        CompositionError::InvalidPair {
            pair: *pair,
            reason: error.to_string(),
        }
        .into()
    } else {
        error.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farm_positions_protocols::ChainCallErrorKind;

    fn addr(last: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[19] = last;
        Address::from_bytes(bytes)
    }

    #[test]
    fn test_revert_is_invalid_pair() {
        let error = ChainCallError::new(
            addr(1),
            "token0",
            ChainCallErrorKind::Rpc {
                code: 3,
                message: "execution reverted".into(),
            },
        );
        assert!(matches!(
            pair_error(&addr(1), error),
            PoolError::Composition(CompositionError::InvalidPair { .. })
        ));
    }

    #[test]
    fn test_transport_failure_stays_chain_error() {
        let error = ChainCallError::new(
            addr(1),
            "getReserves",
            ChainCallErrorKind::Transport("connection reset".into()),
        );
        assert!(matches!(pair_error(&addr(1), error), PoolError::Chain(_)));
    }

    #[test]
    fn test_empty_symbol_dropped() {
        let info = token_info(addr(2), 18, Some(String::new()), None);
        assert_eq!(info.symbol, None);
        let info = token_info(addr(2), 18, Some("CAKE".into()), None);
        assert_eq!(info.symbol.as_deref(), Some("CAKE"));
    }
}
