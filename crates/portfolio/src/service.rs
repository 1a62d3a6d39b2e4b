//! Entry point for one wallet valuation request.

use crate::aggregator::StakingAggregator;
use crate::error::PortfolioError;
use farm_positions_data::PriceProvider;
use farm_positions_domain::{Address, InvalidInputError, Pool, PortfolioSummary, rank};
use farm_positions_protocols::{BlockTag, ChainReader};
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the portfolio service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Upper bound on one request, block lookup included.
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Validates a request, pins a block, values every pool and ranks them.
///
/// Holds no per-request state, so one instance serves concurrent requests.
pub struct PortfolioService<R: ?Sized, P: ?Sized> {
    aggregator: StakingAggregator<R, P>,
    config: ServiceConfig,
}

impl<R, P> PortfolioService<R, P>
where
    R: ChainReader + ?Sized,
    P: PriceProvider + ?Sized,
{
    pub fn new(aggregator: StakingAggregator<R, P>, config: ServiceConfig) -> Self {
        Self { aggregator, config }
    }

    /// Values `wallet`'s stake in each of `pools`.
    ///
    /// Pool-level failures do not fail the request; they surface as
    /// unresolved positions in the summary.
    ///
    /// # Errors
    /// - [`PortfolioError::InvalidInput`] for a malformed address or an empty
    ///   pool list, before any chain access
    /// - [`PortfolioError::ChainUnavailable`] when the block number cannot be read
    /// - [`PortfolioError::Timeout`] when the request exceeds its deadline
    pub async fn summarize(
        &self,
        wallet: &str,
        pools: &[Pool],
    ) -> Result<PortfolioSummary, PortfolioError> {
        let wallet: Address = wallet.parse()?;
        if pools.is_empty() {
            return Err(InvalidInputError::EmptyPoolList.into());
        }
        debug!(wallet = %wallet, pools = pools.len(), "valuing portfolio");

        let timeout = self.config.request_timeout;
        let summary = tokio::time::timeout(timeout, self.value_at_latest(&wallet, pools))
            .await
            .map_err(|_| PortfolioError::Timeout(timeout))??;

        info!(
            wallet = %wallet,
            block = summary.block_number,
            positions = summary.positions.len(),
            active = summary.active().count(),
            unresolved = summary.unresolved,
            total_value = %summary.total_value,
            "portfolio valued"
        );
        Ok(summary)
    }

    async fn value_at_latest(
        &self,
        wallet: &Address,
        pools: &[Pool],
    ) -> Result<PortfolioSummary, PortfolioError> {
        let block = self
            .aggregator
            .reader()
            .block_number()
            .await
            .map_err(PortfolioError::ChainUnavailable)?;

        let positions = self
            .aggregator
            .get_staking(pools, wallet, BlockTag::Number(block))
            .await;
        Ok(rank(*wallet, block, positions))
    }
}
