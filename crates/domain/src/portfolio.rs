use crate::address::Address;
use crate::position::{Position, UnresolvedKind, Valuation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ranked positions of one wallet and their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub wallet: Address,
    /// Block at which every position was read.
    pub block_number: u64,
    /// Descending by total value; equal values keep pool order.
    pub positions: Vec<Position>,
    /// Exact sum of the resolved positions' total values.
    pub total_value: Decimal,
    /// Number of positions carrying an unresolved marker.
    pub unresolved: usize,
}

impl PortfolioSummary {
    /// Positions with a nonzero stake.
    pub fn active(&self) -> impl Iterator<Item = &Position> {
        self.positions
            .iter()
            .filter(|p| p.value().is_some_and(|v| !v.staked.is_zero()))
    }

    /// Sum of pending reward values across positions.
    ///
    /// `None` if the sum overflows.
    pub fn pending_reward_value(&self) -> Option<Decimal> {
        self.positions
            .iter()
            .filter_map(Position::value)
            .filter_map(|v| v.pending_reward.as_ref())
            .try_fold(Decimal::ZERO, |sum, r| sum.checked_add(r.value))
    }
}

/// Sorts positions by total value, highest first, and totals them.
///
/// The sort is stable, so ties stay in the order they were given in.
/// Unresolved positions rank as zero and add nothing to the total. A
/// position whose value would overflow the total is marked unresolved.
pub fn rank(wallet: Address, block_number: u64, mut positions: Vec<Position>) -> PortfolioSummary {
    let mut total_value = Decimal::ZERO;
    for position in &mut positions {
        match total_value.checked_add(position.total_value()) {
            Some(sum) => total_value = sum,
            None => {
                position.valuation = Valuation::Unresolved {
                    kind: UnresolvedKind::Composition,
                    reason: "value overflows the portfolio total".to_string(),
                };
            }
        }
    }

    positions.sort_by(|a, b| b.total_value().cmp(&a.total_value()));
    let unresolved = positions.iter().filter(|p| !p.is_resolved()).count();

    PortfolioSummary {
        wallet,
        block_number,
        positions,
        total_value,
        unresolved,
    }
}
