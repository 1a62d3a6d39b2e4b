//! Concurrent valuation of one wallet across a pool list.

use crate::composition::CompositionResolver;
use crate::error::PoolError;
use farm_positions_data::PriceProvider;
use farm_positions_domain::{
    Address, CompositionError, Holding, PendingReward, Pool, Position, PositionValue, TokenInfo,
};
use farm_positions_protocols::contracts::{Erc20, MasterChef};
use farm_positions_protocols::{BlockTag, ChainReader};
use futures::stream::{self, StreamExt};
use futures::join;
use std::sync::Arc;
use tracing::{debug, warn};

/// Configuration for the staking aggregator.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Pools valued at the same time.
    pub max_concurrent_pools: usize,
    /// Token paid out by the staking contract, for pending rewards.
    pub reward_token: Option<Address>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_pools: 8,
            reward_token: None,
        }
    }
}

/// Values a wallet's stake in every pool of a list.
///
/// Pools are valued with bounded concurrency and results come back in
/// input order. No task is spawned: dropping the returned future abandons
/// every read still in flight.
pub struct StakingAggregator<R: ?Sized, P: ?Sized> {
    reader: Arc<R>,
    prices: Arc<P>,
    masterchef: MasterChef,
    resolver: CompositionResolver,
    erc20: Erc20,
    config: AggregatorConfig,
}

impl<R, P> StakingAggregator<R, P>
where
    R: ChainReader + ?Sized,
    P: PriceProvider + ?Sized,
{
    /// Creates a new aggregator.
    pub fn new(
        reader: Arc<R>,
        prices: Arc<P>,
        masterchef: MasterChef,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            reader,
            prices,
            masterchef,
            resolver: CompositionResolver::new(),
            erc20: Erc20::new(),
            config,
        }
    }

    /// The chain reader in use.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// One position per pool, in the order of `pools`.
    ///
    /// A pool that cannot be valued yields an unresolved position; the other
    /// pools are unaffected.
    pub async fn get_staking(
        &self,
        pools: &[Pool],
        wallet: &Address,
        block: BlockTag,
    ) -> Vec<Position> {
        let reward = self.reward_token_info(block).await;
        let limit = self.config.max_concurrent_pools.max(1);

        let pending: Vec<_> = pools
            .iter()
            .map(|pool| self.value_pool(pool, wallet, reward.as_ref(), block))
            .collect();
        stream::iter(pending).buffered(limit).collect().await
    }

    async fn value_pool(
        &self,
        pool: &Pool,
        wallet: &Address,
        reward: Option<&TokenInfo>,
        block: BlockTag,
    ) -> Position {
        match self.try_value_pool(pool, wallet, reward, block).await {
            Ok(position) => position,
            Err(error) => {
                warn!(
                    pool_id = pool.id,
                    pool = %pool.name,
                    wallet = %wallet,
                    error = %error,
                    "pool left unresolved"
                );
                Position::unresolved(pool, *wallet, error.kind(), error.to_string())
            }
        }
    }

    async fn try_value_pool(
        &self,
        pool: &Pool,
        wallet: &Address,
        reward: Option<&TokenInfo>,
        block: BlockTag,
    ) -> Result<Position, PoolError> {
        let stake = self
            .masterchef
            .user_info(&*self.reader, pool.id, wallet, block)
            .await?
            .amount;

        if stake.is_zero() {
            debug!(pool_id = pool.id, wallet = %wallet, "no stake");
            return Ok(Position::zero(pool, *wallet));
        }

        let (composition, pending) = join!(
            self.resolver
                .resolve(&*self.reader, &*self.prices, &pool.pair_address, block),
            self.pending_reward(pool, wallet, reward, block),
        );
        let composition = composition?;

        let overflow = || CompositionError::Overflow {
            pair: pool.pair_address,
        };
        let (amount0, amount1) = composition.underlying(stake)?;
        let token0 = Holding::priced(&composition.token0, amount0).ok_or_else(overflow)?;
        let token1 = Holding::priced(&composition.token1, amount1).ok_or_else(overflow)?;
        let lp_amount = composition.lp_amount(stake)?;

        let value = PositionValue::new(stake, lp_amount, token0, token1)
            .ok_or_else(overflow)?
            .with_pending_reward(pending);

        debug!(
            pool_id = pool.id,
            wallet = %wallet,
            total_value = %value.total_value,
            "valued pool"
        );
        Ok(Position::resolved(pool, *wallet, value))
    }

    /// Reward token metadata, read once per request. Soft.
    async fn reward_token_info(&self, block: BlockTag) -> Option<TokenInfo> {
        let token = self.config.reward_token?;
        if !self.masterchef.reads_pending_rewards() {
            return None;
        }

        let (decimals, symbol) = join!(
            self.erc20.decimals(&*self.reader, &token, block),
            self.erc20.symbol(&*self.reader, &token, block),
        );
        let decimals = match decimals {
            Ok(decimals) => decimals,
            Err(error) => {
                warn!(token = %token, error = %error, "reward token unreadable, skipping pending rewards");
                return None;
            }
        };

        let price = self.prices.price_usd(&token).await;
        let info = TokenInfo::new(token, decimals).with_price(price);
        Some(match symbol.ok().filter(|s| !s.is_empty()) {
            Some(symbol) => info.with_symbol(symbol),
            None => info,
        })
    }

    /// Harvestable reward of a nonzero stake. Soft: failures yield `None`.
    async fn pending_reward(
        &self,
        pool: &Pool,
        wallet: &Address,
        reward: Option<&TokenInfo>,
        block: BlockTag,
    ) -> Option<PendingReward> {
        let token = reward?;
        let raw = match self
            .masterchef
            .pending_reward(&*self.reader, pool.id, wallet, block)
            .await
        {
            Ok(raw) => raw?,
            Err(error) => {
                warn!(pool_id = pool.id, wallet = %wallet, error = %error, "pending reward unavailable");
                return None;
            }
        };

        let amount = raw.to_decimal(token.decimals)?;
        let value = amount.checked_mul(token.price_or_zero())?;
        Some(PendingReward {
            token: token.address,
            symbol: token.symbol.clone(),
            amount,
            value,
        })
    }
}
