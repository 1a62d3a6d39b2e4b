use farm_positions_data::PriceProvider;
use farm_positions_domain::Pool;
use farm_positions_portfolio::PortfolioService;
use farm_positions_protocols::ChainReader;
use std::sync::Arc;

/// Portfolio service over type-erased chain and price backends.
pub type WalletService = PortfolioService<dyn ChainReader, dyn PriceProvider>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Valuation service.
    pub service: Arc<WalletService>,
    /// Pools valued for every request.
    pub pools: Arc<Vec<Pool>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(service: Arc<WalletService>, pools: Vec<Pool>) -> Self {
        Self {
            service,
            pools: Arc::new(pools),
        }
    }
}
