//! Route definitions.

use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the router with tracing and CORS layers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        .route("/wallet/{address}", get(handlers::wallet))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WalletService;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use farm_positions_data::{PriceProvider, StaticPriceProvider};
    use farm_positions_domain::{Address, Pool};
    use farm_positions_portfolio::{
        AggregatorConfig, PortfolioService, ServiceConfig, StakingAggregator,
    };
    use farm_positions_protocols::contracts::MasterChef;
    use farm_positions_protocols::abi;
    use farm_positions_protocols::{
        Abi, BlockTag, ChainCallError, ChainCallErrorKind, ChainReader, DynSolValue,
    };
    use std::collections::HashMap;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Chain on which the wallet has nothing staked anywhere.
    struct EmptyChain {
        reachable: bool,
    }

    #[async_trait]
    impl ChainReader for EmptyChain {
        async fn call(
            &self,
            _contract: &Address,
            _abi: &Abi,
            _method: &str,
            _args: &[DynSolValue],
            _block: BlockTag,
        ) -> Result<Vec<DynSolValue>, ChainCallError> {
            Ok(vec![abi::uint(0), abi::uint(0)])
        }

        async fn block_number(&self) -> Result<u64, ChainCallError> {
            if self.reachable {
                Ok(7)
            } else {
                Err(ChainCallError::new(
                    "node",
                    "eth_blockNumber",
                    ChainCallErrorKind::Transport("connection refused".into()),
                ))
            }
        }
    }

    fn router(reachable: bool) -> Router {
        let reader: Arc<dyn ChainReader> = Arc::new(EmptyChain { reachable });
        let prices: Arc<dyn PriceProvider> = Arc::new(StaticPriceProvider::new(HashMap::new()));
        let aggregator = StakingAggregator::new(
            reader,
            prices,
            MasterChef::new(Address::ZERO),
            AggregatorConfig::default(),
        );
        let service: WalletService = PortfolioService::new(aggregator, ServiceConfig::default());
        let pools = vec![
            Pool::new(251, "CAKE-BNB", Address::ZERO),
            Pool::new(252, "BUSD-BNB", Address::ZERO),
        ];
        create_router(AppState::new(Arc::new(service), pools))
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(router(true), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["pools"], 2);
    }

    #[tokio::test]
    async fn test_wallet_summary() {
        let address = "0x3c74a5b1d8e2f0a9c6b4d2e8f1a3b5c7d9e0320f";
        let (status, body) = get(router(true), &format!("/wallet/{address}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["address"], address);
        assert_eq!(body["summary"]["block_number"], 7);
        assert_eq!(body["summary"]["total_value"], "0");
        assert_eq!(body["summary"]["positions"][0]["pool_id"], 251);
        assert_eq!(body["summary"]["positions"][1]["pool_id"], 252);
        assert_eq!(body["summary"]["positions"][0]["status"], "resolved");
    }

    #[tokio::test]
    async fn test_malformed_wallet_is_bad_request() {
        let (status, body) = get(router(true), "/wallet/0x1234").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_unreachable_chain_is_unavailable() {
        let address = "0x3c74a5b1d8e2f0a9c6b4d2e8f1a3b5c7d9e0320f";
        let (status, _) = get(router(false), &format!("/wallet/{address}")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
