use super::{decimals_from, uint_at};
use crate::abi::Abi;
use crate::abis;
use crate::error::ChainCallError;
use crate::reader::{BlockTag, ChainReader};
use farm_positions_domain::Address;

/// ERC-20 metadata reads.
#[derive(Debug, Clone)]
pub struct Erc20 {
    abi: Abi,
}

impl Default for Erc20 {
    fn default() -> Self {
        Self::new()
    }
}

impl Erc20 {
    pub fn new() -> Self {
        Self { abi: abis::erc20() }
    }

    /// Decimal precision of `token`.
    pub async fn decimals<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        token: &Address,
        block: BlockTag,
    ) -> Result<u8, ChainCallError> {
        let values = reader.call(token, &self.abi, "decimals", &[], block).await?;
        decimals_from(uint_at(&values, 0, token, "decimals")?, token, "decimals")
    }

    /// Ticker symbol of `token`.
    pub async fn symbol<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        token: &Address,
        block: BlockTag,
    ) -> Result<String, ChainCallError> {
        let values = reader.call(token, &self.abi, "symbol", &[], block).await?;
        Ok(values
            .first()
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string())
    }
}
