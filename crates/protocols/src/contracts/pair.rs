use super::{address_at, decimals_from, uint_at};
use crate::abi::Abi;
use crate::abis;
use crate::error::ChainCallError;
use crate::reader::{BlockTag, ChainReader};
use farm_positions_domain::{Address, TokenAmount};

/// Current reserves of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserves {
    pub reserve0: TokenAmount,
    pub reserve1: TokenAmount,
    /// Timestamp of the last reserve update, as reported by the pair.
    pub block_timestamp_last: u32,
}

/// Reads of a Uniswap-v2 style pair contract.
#[derive(Debug, Clone)]
pub struct PairContract {
    abi: Abi,
}

impl Default for PairContract {
    fn default() -> Self {
        Self::new()
    }
}

impl PairContract {
    pub fn new() -> Self {
        Self { abi: abis::pair() }
    }

    pub async fn token0<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        pair: &Address,
        block: BlockTag,
    ) -> Result<Address, ChainCallError> {
        let values = reader.call(pair, &self.abi, "token0", &[], block).await?;
        address_at(&values, 0, pair, "token0")
    }

    pub async fn token1<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        pair: &Address,
        block: BlockTag,
    ) -> Result<Address, ChainCallError> {
        let values = reader.call(pair, &self.abi, "token1", &[], block).await?;
        address_at(&values, 0, pair, "token1")
    }

    pub async fn reserves<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        pair: &Address,
        block: BlockTag,
    ) -> Result<Reserves, ChainCallError> {
        let values = reader.call(pair, &self.abi, "getReserves", &[], block).await?;
        let timestamp = uint_at(&values, 2, pair, "getReserves")?;
        Ok(Reserves {
            reserve0: uint_at(&values, 0, pair, "getReserves")?.into(),
            reserve1: uint_at(&values, 1, pair, "getReserves")?.into(),
            block_timestamp_last: timestamp.low_u32(),
        })
    }

    pub async fn total_supply<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        pair: &Address,
        block: BlockTag,
    ) -> Result<TokenAmount, ChainCallError> {
        let values = reader.call(pair, &self.abi, "totalSupply", &[], block).await?;
        Ok(uint_at(&values, 0, pair, "totalSupply")?.into())
    }

    /// Decimals of the LP token itself.
    pub async fn decimals<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        pair: &Address,
        block: BlockTag,
    ) -> Result<u8, ChainCallError> {
        let values = reader.call(pair, &self.abi, "decimals", &[], block).await?;
        decimals_from(uint_at(&values, 0, pair, "decimals")?, pair, "decimals")
    }
}
