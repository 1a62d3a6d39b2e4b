//! Cross-check of the configured pools against the staking contract.

use farm_positions_domain::Pool;
use farm_positions_protocols::contracts::MasterChef;
use farm_positions_protocols::{BlockTag, ChainReader};
use futures::future::join_all;

/// One status line per pool, in the order of `pools`.
///
/// All `poolInfo` reads are issued at once and pinned to `block`.
pub async fn pool_checks<R: ChainReader + ?Sized>(
    masterchef: &MasterChef,
    reader: &R,
    pools: &[Pool],
    block: BlockTag,
) -> Vec<String> {
    let reads = pools.iter().map(|pool| async move {
        match masterchef.pool_info(reader, pool.id, block).await {
            Ok(info) if info.lp_token == pool.pair_address => {
                format!("ok ({} alloc)", info.alloc_point)
            }
            Ok(info) => format!("mismatch: {}", info.lp_token),
            Err(error) => format!("error: {error}"),
        }
    });
    join_all(reads).await
}
