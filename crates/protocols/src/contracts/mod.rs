//! Typed bindings over [`ChainReader`](crate::reader::ChainReader).
//!
//! Each binding owns its ABI descriptor and turns decoded values into
//! domain types, so callers never handle raw [`DynSolValue`](alloy::dyn_abi::DynSolValue)s.

mod erc20;
mod masterchef;
mod pair;

pub use erc20::Erc20;
pub use masterchef::{MasterChef, PoolInfo, UserInfo};
pub use pair::{PairContract, Reserves};

use crate::abi;
use alloy::dyn_abi::DynSolValue;
use crate::error::{AbiError, ChainCallError};
use farm_positions_domain::Address;
use primitive_types::U256;

fn output_error(contract: &Address, method: &str, index: usize, expected: &str) -> ChainCallError {
    ChainCallError::new(
        contract,
        method,
        AbiError::InvalidData {
            method: method.to_string(),
            reason: format!("output {index} is not {expected}"),
        },
    )
}

fn uint_at(
    values: &[DynSolValue],
    index: usize,
    contract: &Address,
    method: &str,
) -> Result<U256, ChainCallError> {
    values
        .get(index)
        .and_then(abi::to_u256)
        .ok_or_else(|| output_error(contract, method, index, "a uint"))
}

fn address_at(
    values: &[DynSolValue],
    index: usize,
    contract: &Address,
    method: &str,
) -> Result<Address, ChainCallError> {
    values
        .get(index)
        .and_then(abi::to_address)
        .ok_or_else(|| output_error(contract, method, index, "an address"))
}

fn decimals_from(value: U256, contract: &Address, method: &str) -> Result<u8, ChainCallError> {
    u8::try_from(value.low_u64())
        .ok()
        .filter(|_| value.bits() <= 8)
        .ok_or_else(|| output_error(contract, method, 0, "a uint8"))
}
