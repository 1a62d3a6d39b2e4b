use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a currency value with two fraction digits and thousands separators,
/// e.g. `1234567.891` becomes `1,234,567.89`.
pub fn format_usd(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(0)), "0.00");
        assert_eq!(format_usd(dec!(5)), "5.00");
        assert_eq!(format_usd(dec!(999.999)), "1,000.00");
        assert_eq!(format_usd(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_usd(dec!(0.005)), "0.01");
        assert_eq!(format_usd(dec!(-1234.5)), "-1,234.50");
    }
}
