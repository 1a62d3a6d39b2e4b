use crate::address::Address;
use crate::error::CompositionError;
use crate::math;
use crate::token::{TokenAmount, TokenInfo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A numbered farm in the staking contract, backed by one LP pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Pool index (`pid`) in the staking contract.
    pub id: u64,
    /// Display name, e.g. `CAKE-BNB`.
    pub name: String,
    /// LP token staked in this farm.
    pub pair_address: Address,
    /// Reward multiplier as advertised by the farm, e.g. `40x`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<String>,
}

impl Pool {
    pub fn new(id: u64, name: impl Into<String>, pair_address: Address) -> Self {
        Self {
            id,
            name: name.into(),
            pair_address,
            multiplier: None,
        }
    }
}

/// Pair contract state needed to split an LP amount into its two reserves.
///
/// Reserves and total supply are read at the same block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairComposition {
    pub pair: Address,
    /// Decimals of the LP token itself.
    pub decimals: u8,
    pub token0: TokenInfo,
    pub token1: TokenInfo,
    pub reserve0: TokenAmount,
    pub reserve1: TokenAmount,
    pub total_supply: TokenAmount,
}

impl PairComposition {
    /// Decimal-adjusted amounts of token0 and token1 claimable by `stake` LP units.
    ///
    /// A zero stake always yields zero, whatever the pair state.
    pub fn underlying(&self, stake: TokenAmount) -> Result<(Decimal, Decimal), CompositionError> {
        if stake.is_zero() {
            return Ok((Decimal::ZERO, Decimal::ZERO));
        }
        if self.total_supply.is_zero() {
            return Err(CompositionError::ZeroTotalSupply { pair: self.pair });
        }

        let overflow = || CompositionError::Overflow { pair: self.pair };
        let amount0 = math::share_of_reserve(
            self.reserve0.0,
            stake.0,
            self.total_supply.0,
            self.token0.decimals,
        )
        .ok_or_else(overflow)?;
        let amount1 = math::share_of_reserve(
            self.reserve1.0,
            stake.0,
            self.total_supply.0,
            self.token1.decimals,
        )
        .ok_or_else(overflow)?;

        Ok((amount0, amount1))
    }

    /// Staked LP amount in whole LP tokens.
    pub fn lp_amount(&self, stake: TokenAmount) -> Result<Decimal, CompositionError> {
        stake
            .to_decimal(self.decimals)
            .ok_or(CompositionError::Overflow { pair: self.pair })
    }
}
