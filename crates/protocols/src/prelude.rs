//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use farm_positions_protocols::prelude::*;
//! ```

pub use crate::abi::Abi;
pub use alloy::dyn_abi::DynSolValue;
pub use crate::contracts::{Erc20, MasterChef, PairContract, PoolInfo, Reserves, UserInfo};
pub use crate::error::{AbiError, ChainCallError, ChainCallErrorKind};
pub use crate::reader::{BlockTag, ChainReader};
pub use crate::rpc::{RpcConfig, RpcProvider};
