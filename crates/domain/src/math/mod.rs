//! Exact conversions from raw on-chain integers to decimals.

mod fixed_point;

pub use fixed_point::{MAX_TOKEN_DECIMALS, pow10, ratio_to_decimal, share_of_reserve};
