use super::{address_at, uint_at};
use crate::abi::{self, Abi};
use crate::abis;
use crate::error::ChainCallError;
use crate::reader::{BlockTag, ChainReader};
use farm_positions_domain::{Address, TokenAmount};

/// Per-user accounting of one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserInfo {
    /// LP units staked, raw.
    pub amount: TokenAmount,
    /// Reward already accounted for, raw.
    ///
    /// `None` when the contract reports it as a signed value, as MiniChef
    /// forks do.
    pub reward_debt: Option<TokenAmount>,
}

/// Pool record held by the staking contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolInfo {
    pub lp_token: Address,
    pub alloc_point: u64,
}

/// Bindings for a MasterChef-style staking contract.
#[derive(Debug, Clone)]
pub struct MasterChef {
    address: Address,
    abi: Abi,
    pending_method: Option<String>,
}

impl MasterChef {
    /// Binds the PancakeSwap MasterChef interface at `address`.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            abi: abis::masterchef(),
            pending_method: Some(abis::PENDING_CAKE.to_string()),
        }
    }

    /// Uses a caller-supplied descriptor instead of the built-in one.
    pub fn with_abi(mut self, abi: Abi) -> Self {
        self.abi = abi;
        self
    }

    /// Name of the pending-reward view, or `None` to skip reward reads.
    pub fn with_pending_method(mut self, method: Option<String>) -> Self {
        self.pending_method = method.filter(|m| !m.is_empty());
        self
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Whether pending rewards can be read with the configured descriptor.
    #[must_use]
    pub fn reads_pending_rewards(&self) -> bool {
        self.pending_method
            .as_deref()
            .is_some_and(|m| self.abi.has_function(m))
    }

    /// Stake of `wallet` in pool `pool_id`.
    pub async fn user_info<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        pool_id: u64,
        wallet: &Address,
        block: BlockTag,
    ) -> Result<UserInfo, ChainCallError> {
        let args = [abi::uint(pool_id.into()), abi::address(*wallet)];
        let values = reader
            .call(&self.address, &self.abi, "userInfo", &args, block)
            .await?;
        Ok(UserInfo {
            amount: uint_at(&values, 0, &self.address, "userInfo")?.into(),
            reward_debt: values.get(1).and_then(abi::to_u256).map(TokenAmount::from),
        })
    }

    /// Harvestable reward of `wallet` in pool `pool_id`, raw.
    ///
    /// `None` when no pending-reward view is configured.
    pub async fn pending_reward<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        pool_id: u64,
        wallet: &Address,
        block: BlockTag,
    ) -> Result<Option<TokenAmount>, ChainCallError> {
        let Some(method) = self.pending_method.as_deref() else {
            return Ok(None);
        };
        let args = [abi::uint(pool_id.into()), abi::address(*wallet)];
        let values = reader
            .call(&self.address, &self.abi, method, &args, block)
            .await?;
        Ok(Some(uint_at(&values, 0, &self.address, method)?.into()))
    }

    /// Pool record for `pool_id`.
    pub async fn pool_info<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        pool_id: u64,
        block: BlockTag,
    ) -> Result<PoolInfo, ChainCallError> {
        let values = reader
            .call(&self.address, &self.abi, "poolInfo", &[abi::uint(pool_id.into())], block)
            .await?;
        Ok(PoolInfo {
            lp_token: address_at(&values, 0, &self.address, "poolInfo")?,
            alloc_point: uint_at(&values, 1, &self.address, "poolInfo")?.low_u64(),
        })
    }

    /// Number of pools registered in the contract.
    pub async fn pool_length<R: ChainReader + ?Sized>(
        &self,
        reader: &R,
        block: BlockTag,
    ) -> Result<u64, ChainCallError> {
        let values = reader
            .call(&self.address, &self.abi, "poolLength", &[], block)
            .await?;
        Ok(uint_at(&values, 0, &self.address, "poolLength")?.low_u64())
    }
}
