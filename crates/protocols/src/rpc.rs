//! JSON-RPC provider for `eth_call` reads.

use crate::abi::{self, Abi};
use crate::error::{ChainCallError, ChainCallErrorKind};
use crate::reader::{BlockTag, ChainReader};
use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{self, Bytes};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::TransportError;
use async_trait::async_trait;
use farm_positions_domain::Address;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Public BNB Smart Chain endpoint.
pub const DEFAULT_RPC_URL: &str = "https://bsc-dataseed1.defibit.io/";

/// Target label for calls that are not aimed at a contract.
const NODE: &str = "node";

/// Configuration for the RPC provider.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Chain reader backed by a JSON-RPC endpoint.
///
/// Wraps one alloy HTTP provider, so connections are kept alive and shared
/// by concurrent calls. Every request is bounded by the configured timeout.
pub struct RpcProvider {
    provider: DynProvider,
    config: RpcConfig,
}

impl RpcProvider {
    /// Creates a new provider.
    ///
    /// # Errors
    /// Returns an error if the endpoint URL is invalid.
    pub fn new(config: RpcConfig) -> Result<Self, ChainCallError> {
        let url: reqwest::Url = config.url.parse().map_err(|e| {
            ChainCallError::new(
                NODE,
                "connect",
                ChainCallErrorKind::Transport(format!("invalid RPC URL {:?}: {e}", config.url)),
            )
        })?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        Ok(Self { provider, config })
    }

    /// Endpoint this provider talks to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    async fn bounded<T>(
        &self,
        request: impl Future<Output = Result<T, TransportError>>,
    ) -> Result<T, ChainCallErrorKind> {
        match tokio::time::timeout(self.timeout(), request).await {
            Ok(result) => result.map_err(classify),
            Err(_) => Err(ChainCallErrorKind::Transport(format!(
                "no response within {}s",
                self.config.timeout_secs
            ))),
        }
    }

    /// Executes `eth_call` at `block` and returns the raw return data.
    ///
    /// # Errors
    /// Returns an error on transport failure, timeout or RPC error.
    pub async fn eth_call(
        &self,
        to: &Address,
        data: Vec<u8>,
        block: BlockTag,
    ) -> Result<Vec<u8>, ChainCallErrorKind> {
        let request = TransactionRequest::default()
            .to(primitives::Address::from(*to))
            .input(Bytes::from(data).into());
        let output = self
            .bounded(async { self.provider.call(request).block(block.into()).await })
            .await?;
        Ok(output.to_vec())
    }
}

#[async_trait]
impl ChainReader for RpcProvider {
    async fn call(
        &self,
        contract: &Address,
        abi: &Abi,
        method: &str,
        args: &[DynSolValue],
        block: BlockTag,
    ) -> Result<Vec<DynSolValue>, ChainCallError> {
        let fail = |kind: ChainCallErrorKind| ChainCallError::new(contract, method, kind);

        let function = abi.function(method, args.len()).map_err(|e| fail(e.into()))?;
        let data = abi::encode_input(function, args).map_err(|e| fail(e.into()))?;

        debug!(contract = %contract, method, block = %block, "eth_call");
        let output = self.eth_call(contract, data, block).await.map_err(fail)?;

        abi::decode_output(function, &output).map_err(|e| fail(e.into()))
    }

    async fn block_number(&self) -> Result<u64, ChainCallError> {
        self.bounded(async { self.provider.get_block_number().await })
            .await
            .map_err(|kind| ChainCallError::new(NODE, "eth_blockNumber", kind))
    }
}

/// Sorts a transport error into node errors, unreachable endpoints and
/// unusable answers.
fn classify(error: TransportError) -> ChainCallErrorKind {
    if let Some(payload) = error.as_error_resp() {
        return ChainCallErrorKind::Rpc {
            code: payload.code,
            message: payload.message.to_string(),
        };
    }
    if error.is_transport_error() {
        ChainCallErrorKind::Transport(error.to_string())
    } else {
        ChainCallErrorKind::Response(error.to_string())
    }
}
