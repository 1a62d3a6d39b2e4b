use crate::address::Address;
use crate::pool::Pool;
use crate::token::{Price, TokenAmount, TokenInfo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal-adjusted holding of one underlying token and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// `None` for zero-stake pools, whose pair is never read.
    pub token: Option<Address>,
    pub symbol: Option<String>,
    pub amount: Decimal,
    pub price: Option<Price>,
    pub value: Decimal,
}

impl Holding {
    /// A holding with nothing in it.
    pub fn empty() -> Self {
        Self {
            token: None,
            symbol: None,
            amount: Decimal::ZERO,
            price: None,
            value: Decimal::ZERO,
        }
    }

    /// Values `amount` of `token` at its resolved price, or zero if unpriced.
    ///
    /// Returns `None` if the product overflows.
    pub fn priced(token: &TokenInfo, amount: Decimal) -> Option<Self> {
        let value = amount.checked_mul(token.price_or_zero())?;
        Some(Self {
            token: Some(token.address),
            symbol: token.symbol.clone(),
            amount,
            price: token.price,
            value,
        })
    }
}

/// Rewards earned by the stake but not yet harvested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReward {
    pub token: Address,
    pub symbol: Option<String>,
    pub amount: Decimal,
    pub value: Decimal,
}

/// Valuation of a stake that could be fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionValue {
    /// Raw LP units staked.
    pub staked: TokenAmount,
    /// Staked LP in whole tokens.
    pub lp_amount: Decimal,
    pub token0: Holding,
    pub token1: Holding,
    /// `token0.value + token1.value`. Pending rewards are not included.
    pub total_value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_reward: Option<PendingReward>,
}

impl PositionValue {
    pub fn new(staked: TokenAmount, lp_amount: Decimal, token0: Holding, token1: Holding) -> Option<Self> {
        let total_value = token0.value.checked_add(token1.value)?;
        Some(Self {
            staked,
            lp_amount,
            token0,
            token1,
            total_value,
            pending_reward: None,
        })
    }

    pub fn with_pending_reward(mut self, reward: Option<PendingReward>) -> Self {
        self.pending_reward = reward;
        self
    }
}

/// Which pool-scoped failure left a position unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedKind {
    /// A chain read for the stake failed.
    ChainCall,
    /// The pair state could not be decomposed.
    Composition,
}

/// Outcome of valuing one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Valuation {
    Resolved(PositionValue),
    Unresolved { kind: UnresolvedKind, reason: String },
}

/// A wallet's position in one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub pool_id: u64,
    pub pool_name: String,
    pub wallet: Address,
    #[serde(flatten)]
    pub valuation: Valuation,
}

impl Position {
    /// Position for a pool where the wallet has nothing staked.
    pub fn zero(pool: &Pool, wallet: Address) -> Self {
        let value = PositionValue {
            staked: TokenAmount::zero(),
            lp_amount: Decimal::ZERO,
            token0: Holding::empty(),
            token1: Holding::empty(),
            total_value: Decimal::ZERO,
            pending_reward: None,
        };
        Self::resolved(pool, wallet, value)
    }

    pub fn resolved(pool: &Pool, wallet: Address, value: PositionValue) -> Self {
        Self {
            pool_id: pool.id,
            pool_name: pool.name.clone(),
            wallet,
            valuation: Valuation::Resolved(value),
        }
    }

    pub fn unresolved(
        pool: &Pool,
        wallet: Address,
        kind: UnresolvedKind,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            pool_id: pool.id,
            pool_name: pool.name.clone(),
            wallet,
            valuation: Valuation::Unresolved {
                kind,
                reason: reason.into(),
            },
        }
    }

    pub fn value(&self) -> Option<&PositionValue> {
        match &self.valuation {
            Valuation::Resolved(value) => Some(value),
            Valuation::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.value().is_some()
    }

    /// Total value for ranking; unresolved positions count as zero.
    pub fn total_value(&self) -> Decimal {
        self.value().map_or(Decimal::ZERO, |v| v.total_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pool() -> Pool {
        Pool::new(251, "CAKE-BNB", Address::ZERO)
    }

    #[test]
    fn test_priced_holding() {
        let token = TokenInfo::new(Address::ZERO, 18)
            .with_symbol("CAKE")
            .with_price(Price::new(dec!(2.25)));
        let holding = Holding::priced(&token, dec!(10)).unwrap();
        assert_eq!(holding.value, dec!(22.50));
        assert_eq!(holding.symbol.as_deref(), Some("CAKE"));
    }

    #[test]
    fn test_unpriced_holding_is_zero_value() {
        let token = TokenInfo::new(Address::ZERO, 18);
        let holding = Holding::priced(&token, dec!(10)).unwrap();
        assert_eq!(holding.amount, dec!(10));
        assert_eq!(holding.price, None);
        assert_eq!(holding.value, Decimal::ZERO);
    }

    #[test]
    fn test_zero_position() {
        let position = Position::zero(&pool(), Address::ZERO);
        assert!(position.is_resolved());
        assert_eq!(position.total_value(), Decimal::ZERO);
        assert_eq!(position.pool_id, 251);
    }

    #[test]
    fn test_unresolved_position_ranks_as_zero() {
        let position = Position::unresolved(
            &pool(),
            Address::ZERO,
            UnresolvedKind::ChainCall,
            "connection reset",
        );
        assert!(!position.is_resolved());
        assert_eq!(position.total_value(), Decimal::ZERO);
    }

    #[test]
    fn test_unresolved_serializes_with_marker() {
        let position = Position::unresolved(
            &pool(),
            Address::ZERO,
            UnresolvedKind::Composition,
            "not a pair",
        );
        let json = serde_json::to_value(&position).unwrap();
        assert_eq!(json["status"], "unresolved");
        assert_eq!(json["kind"], "composition");
        assert_eq!(json["reason"], "not a pair");
        assert_eq!(json["pool_id"], 251);
    }
}
