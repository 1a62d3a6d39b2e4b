use crate::address::Address;
use crate::math;
use primitive_types::{U256, U512};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw on-chain token quantity, before any decimal adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenAmount(pub U256);

impl TokenAmount {
    pub fn new(amount: impl Into<U256>) -> Self {
        Self(amount.into())
    }

    pub fn zero() -> Self {
        Self(U256::zero())
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Divides by `10^decimals` exactly. `None` only when the result is
    /// outside the `Decimal` range.
    pub fn to_decimal(&self, decimals: u8) -> Option<Decimal> {
        math::ratio_to_decimal(U512::from(self.0), math::pow10(decimals)?)
    }
}

impl From<u64> for TokenAmount {
    fn from(v: u64) -> Self {
        Self(U256::from(v))
    }
}

impl From<u128> for TokenAmount {
    fn from(v: u128) -> Self {
        Self(U256::from(v))
    }
}

impl From<U256> for TokenAmount {
    fn from(v: U256) -> Self {
        Self(v)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price of one whole token in the reference currency (USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(pub Decimal);

impl Price {
    /// Returns `None` for negative quotes, which no feed should produce.
    pub fn new(price: Decimal) -> Option<Self> {
        (!price.is_sign_negative()).then_some(Self(price))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One side of a pair: token contract, precision and (once resolved) price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: Option<String>,
    pub decimals: u8,
    /// `None` when no price source knows the token.
    pub price: Option<Price>,
}

impl TokenInfo {
    pub fn new(address: Address, decimals: u8) -> Self {
        Self {
            address,
            symbol: None,
            decimals,
            price: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_price(mut self, price: Option<Price>) -> Self {
        self.price = price;
        self
    }

    /// The price used for valuation; unknown tokens contribute nothing.
    pub fn price_or_zero(&self) -> Decimal {
        self.price.map_or(Decimal::ZERO, |p| p.0)
    }

    /// Symbol if known, otherwise the shortened address.
    pub fn label(&self) -> String {
        self.symbol.clone().unwrap_or_else(|| self.address.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_decimal_eighteen_places() {
        let wei = TokenAmount::new(U256::from_dec_str("1500000000000000000").unwrap());
        assert_eq!(wei.to_decimal(18), Some(dec!(1.5)));
    }

    #[test]
    fn test_to_decimal_smallest_unit() {
        assert_eq!(
            TokenAmount::from(1u64).to_decimal(18),
            Some(dec!(0.000000000000000001))
        );
    }

    #[test]
    fn test_to_decimal_zero_decimals() {
        assert_eq!(TokenAmount::from(42u64).to_decimal(0), Some(dec!(42)));
    }

    #[test]
    fn test_price_rejects_negative() {
        assert!(Price::new(dec!(-1)).is_none());
        assert_eq!(Price::new(dec!(2.5)), Some(Price(dec!(2.5))));
    }

    #[test]
    fn test_unpriced_token_values_at_zero() {
        let token = TokenInfo::new(Address::ZERO, 18);
        assert_eq!(token.price_or_zero(), Decimal::ZERO);
        assert_eq!(token.label(), "0x0000...0000");
    }
}
