use crate::abi::Abi;
use crate::error::ChainCallError;
use alloy::dyn_abi::DynSolValue;
use alloy::eips::BlockId;
use async_trait::async_trait;
use farm_positions_domain::Address;
use std::fmt;
use std::sync::Arc;

/// Block at which a read is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTag {
    Latest,
    Number(u64),
}

impl From<BlockTag> for BlockId {
    fn from(tag: BlockTag) -> Self {
        match tag {
            BlockTag::Latest => BlockId::latest(),
            BlockTag::Number(n) => BlockId::number(n),
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Stateless capability to call read-only contract functions.
///
/// Implementations must be safe to call concurrently for independent calls.
/// They do not retry.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Calls `method` (name or signature) of `contract` as described by
    /// `abi` and decodes its outputs.
    async fn call(
        &self,
        contract: &Address,
        abi: &Abi,
        method: &str,
        args: &[DynSolValue],
        block: BlockTag,
    ) -> Result<Vec<DynSolValue>, ChainCallError>;

    /// Latest block number known to the node.
    async fn block_number(&self) -> Result<u64, ChainCallError>;
}

#[async_trait]
impl<R: ChainReader + ?Sized> ChainReader for Arc<R> {
    async fn call(
        &self,
        contract: &Address,
        abi: &Abi,
        method: &str,
        args: &[DynSolValue],
        block: BlockTag,
    ) -> Result<Vec<DynSolValue>, ChainCallError> {
        (**self).call(contract, abi, method, args, block).await
    }

    async fn block_number(&self) -> Result<u64, ChainCallError> {
        (**self).block_number().await
    }
}
