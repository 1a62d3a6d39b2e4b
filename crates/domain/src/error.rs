use crate::address::Address;
use thiserror::Error;

/// Input rejected before any chain access happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Not `0x` followed by 40 hex digits.
    #[error("malformed address {0:?}: expected 0x followed by 40 hex digits")]
    MalformedAddress(String),
    /// Nothing to value.
    #[error("pool list is empty")]
    EmptyPoolList,
}

/// A pair contract whose state cannot be turned into underlying amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// The address did not answer the pair interface.
    #[error("{pair} is not a readable pair contract: {reason}")]
    InvalidPair { pair: Address, reason: String },
    /// Stake is nonzero but the pair reports no supply.
    #[error("pair {pair} reports zero total supply for a nonzero stake")]
    ZeroTotalSupply { pair: Address },
    /// The result does not fit in a decimal.
    #[error("amounts of pair {pair} exceed the decimal range")]
    Overflow { pair: Address },
}
