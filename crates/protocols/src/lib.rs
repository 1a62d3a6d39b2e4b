//! Read-only access to EVM contracts over JSON-RPC.
//!
//! This crate provides the chain reader used by the valuation pipeline:
//! - Call encoding from JSON ABI descriptors, on alloy's dynamic ABI types
//! - An `eth_call` provider over an alloy HTTP provider, pinned to a block
//! - Typed bindings for the MasterChef, pair (LP) and ERC-20 contracts

/// ABI descriptors and the call codec.
pub mod abi;
/// Built-in ABI descriptors.
pub mod abis;
/// Typed contract bindings.
pub mod contracts;
/// Error types.
pub mod error;
/// Prelude module for convenient imports.
pub mod prelude;
/// The chain reader abstraction.
pub mod reader;
/// JSON-RPC provider.
pub mod rpc;

pub use abi::Abi;
pub use alloy::dyn_abi::DynSolValue;
pub use error::{AbiError, ChainCallError, ChainCallErrorKind};
pub use reader::{BlockTag, ChainReader};
pub use rpc::{RpcConfig, RpcProvider};
