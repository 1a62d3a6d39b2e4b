//! Error types for chain reads.

use thiserror::Error;

/// Failure to describe, encode or decode a contract call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// The descriptor is neither a JSON ABI nor valid human-readable signatures.
    #[error("invalid ABI descriptor: {0}")]
    InvalidDescriptor(String),
    /// No function with that name or signature in the descriptor.
    #[error("method {0:?} not found in ABI")]
    UnknownMethod(String),
    /// Several overloads take the given number of arguments.
    #[error("method {method:?} is ambiguous between {candidates:?}, call it by signature")]
    AmbiguousMethod {
        method: String,
        candidates: Vec<String>,
    },
    /// Arguments do not match the function's inputs.
    #[error("cannot encode arguments of {method}: {reason}")]
    Encode { method: String, reason: String },
    /// Empty return data for a function that declares outputs.
    #[error("{len} bytes of return data are too short for {method}")]
    ShortData { method: String, len: usize },
    /// Return data present but not decodable as the declared outputs.
    #[error("invalid return data for {method}: {reason}")]
    InvalidData { method: String, reason: String },
}

/// What went wrong with a single chain call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainCallErrorKind {
    /// HTTP-level failure: connect, timeout, bad status.
    #[error("transport error: {0}")]
    Transport(String),
    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    /// The node answered with something that is not a JSON-RPC result.
    #[error("malformed RPC response: {0}")]
    Response(String),
    /// Encoding the call or decoding its result failed.
    #[error(transparent)]
    Abi(#[from] AbiError),
}

/// A failed read-only call, with the call that failed attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{method} on {target} failed: {kind}")]
pub struct ChainCallError {
    /// Contract address, or `node` for calls not aimed at a contract.
    pub target: String,
    pub method: String,
    #[source]
    pub kind: ChainCallErrorKind,
}

impl ChainCallError {
    pub fn new(
        target: impl ToString,
        method: impl Into<String>,
        kind: impl Into<ChainCallErrorKind>,
    ) -> Self {
        Self {
            target: target.to_string(),
            method: method.into(),
            kind: kind.into(),
        }
    }

    /// True when the contract answered but not with the expected interface:
    /// empty or undecodable return data, or a reverted call.
    #[must_use]
    pub fn is_interface_mismatch(&self) -> bool {
        match &self.kind {
            ChainCallErrorKind::Abi(
                AbiError::ShortData { .. } | AbiError::InvalidData { .. },
            ) => true,
            ChainCallErrorKind::Rpc { code, message } => {
                *code == 3 || message.to_lowercase().contains("revert")
            }
            _ => false,
        }
    }

    /// True when the node itself could not be reached or answered garbage.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ChainCallErrorKind::Transport(_) | ChainCallErrorKind::Response(_)
        )
    }
}
