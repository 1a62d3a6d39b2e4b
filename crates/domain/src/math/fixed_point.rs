use primitive_types::{U256, U512};
use rust_decimal::Decimal;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Largest decimal precision for which `10^decimals` still fits in a `U256`.
pub const MAX_TOKEN_DECIMALS: u8 = 77;

/// `10^exp` as a `U512`, or `None` past [`MAX_TOKEN_DECIMALS`].
pub fn pow10(exp: u8) -> Option<U512> {
    (exp <= MAX_TOKEN_DECIMALS).then(|| U512::exp10(exp as usize))
}

/// Converts `numerator / denominator` into the most precise `Decimal` that fits.
///
/// The quotient is truncated at the largest scale (up to 28 fractional
/// digits) whose mantissa still fits in 96 bits. Returns `None` for a zero
/// denominator or when even the integer part is out of range.
pub fn ratio_to_decimal(numerator: U512, denominator: U512) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }

    for scale in (0..=MAX_SCALE).rev() {
        let Some(scaled) = numerator.checked_mul(U512::exp10(scale as usize)) else {
            continue;
        };
        let mantissa = scaled / denominator;
        if mantissa.bits() <= 96 {
            let mantissa = mantissa.low_u128() as i128;
            return Some(Decimal::from_i128_with_scale(mantissa, scale).normalize());
        }
    }
    None
}

/// Decimal-adjusted quantity of one reserve claimable by `stake` LP units.
///
/// Computes `reserve * stake / (total_supply * 10^decimals)`, multiplying in
/// 512 bits before dividing so no low-order units are lost.
pub fn share_of_reserve(
    reserve: U256,
    stake: U256,
    total_supply: U256,
    decimals: u8,
) -> Option<Decimal> {
    let numerator = reserve.full_mul(stake);
    let denominator = U512::from(total_supply).checked_mul(pow10(decimals)?)?;
    ratio_to_decimal(numerator, denominator)
}
