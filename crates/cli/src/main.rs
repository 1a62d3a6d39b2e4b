//! Command line interface for MasterChef farm valuation.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use farm_positions_api::{ApiServer, AppState, ServerConfig, WalletService};
use farm_positions_data::catalog;
use farm_positions_data::{
    CoinGeckoProvider, FallbackPriceProvider, PriceProvider, StaticPriceProvider,
};
use farm_positions_domain::Pool;
use farm_positions_portfolio::{
    AggregatorConfig, PortfolioService, ServiceConfig, StakingAggregator,
};
use farm_positions_protocols::contracts::MasterChef;
use farm_positions_protocols::{Abi, BlockTag, ChainReader, RpcConfig, RpcProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod display;
mod verify;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "farm-positions")]
#[command(about = "Value a wallet's MasterChef farm positions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked positions of a wallet
    Position {
        /// Wallet address (0x followed by 40 hex digits)
        #[arg(short, long)]
        wallet: String,
    },
    /// List the configured pools
    Pools {
        /// Compare each pool's pair with the staking contract's record
        #[arg(long)]
        verify: bool,
    },
    /// Show USD prices of the catalog tokens
    Prices,
    /// Start the HTTP API
    Serve {
        /// Port to listen on (defaults to PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Shared backends built from the configuration.
struct Backends {
    reader: Arc<RpcProvider>,
    coingecko: Arc<CoinGeckoProvider>,
    prices: Arc<FallbackPriceProvider>,
    masterchef: MasterChef,
}

impl Backends {
    fn new(config: &AppConfig) -> Result<Self> {
        let reader = RpcProvider::new(RpcConfig {
            url: config.rpc_url.clone(),
            timeout_secs: config.rpc_timeout_secs,
        })
        .context("failed to create RPC provider")?;

        let coingecko = Arc::new(
            CoinGeckoProvider::new(
                config.coingecko_url.clone(),
                catalog::price_feed_ids(),
                Duration::from_secs(config.rpc_timeout_secs),
            )
            .context("failed to create CoinGecko provider")?,
        );
        let pegged: Arc<dyn PriceProvider> =
            Arc::new(StaticPriceProvider::new(catalog::pegged_prices()));
        let live: Arc<dyn PriceProvider> = coingecko.clone();
        let prices = Arc::new(FallbackPriceProvider::new(vec![live, pegged]));

        let mut masterchef = MasterChef::new(config.masterchef_address)
            .with_pending_method(config.pending_reward_method.clone());
        if let Some(path) = &config.masterchef_abi_file {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read ABI file {}", path.display()))?;
            let abi = Abi::from_json(&json)
                .with_context(|| format!("invalid ABI file {}", path.display()))?;
            masterchef = masterchef.with_abi(abi);
        }

        Ok(Self {
            reader: Arc::new(reader),
            coingecko,
            prices,
            masterchef,
        })
    }

    fn service(&self, config: &AppConfig) -> WalletService {
        let reader: Arc<dyn ChainReader> = self.reader.clone();
        let prices: Arc<dyn PriceProvider> = self.prices.clone();
        let aggregator = StakingAggregator::new(
            reader,
            prices,
            self.masterchef.clone(),
            AggregatorConfig {
                max_concurrent_pools: config.max_concurrent_pools,
                reward_token: config.reward_token,
            },
        );
        PortfolioService::new(
            aggregator,
            ServiceConfig {
                request_timeout: Duration::from_secs(config.request_timeout_secs),
            },
        )
    }
}

fn load_pools(config: &AppConfig) -> Result<Vec<Pool>> {
    match &config.pools_file {
        Some(path) => {
            let pools = catalog::load_pools(path)
                .with_context(|| format!("failed to load pools from {}", path.display()))?;
            info!(path = %path.display(), pools = pools.len(), "loaded pool file");
            Ok(pools)
        }
        None => Ok(catalog::default_pools()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    debug!(?config, "configuration loaded");

    let backends = Backends::new(&config)?;
    let pools = load_pools(&config)?;

    match cli.command {
        Commands::Position { wallet } => {
            let service = backends.service(&config);
            let summary = service.summarize(&wallet, &pools).await?;

            println!("Wallet {}", summary.wallet);
            display::summary_table(&summary).printstd();
            println!("{}", display::footer(&summary));
        }
        Commands::Pools { verify } => {
            if !verify {
                display::pools_table(&pools, None).printstd();
                return Ok(());
            }

            let block = BlockTag::Number(
                backends
                    .reader
                    .block_number()
                    .await
                    .context("chain endpoint unavailable")?,
            );
            let registered = backends
                .masterchef
                .pool_length(backends.reader.as_ref(), block)
                .await
                .context("failed to read pool count")?;

            let checks =
                verify::pool_checks(&backends.masterchef, backends.reader.as_ref(), &pools, block)
                    .await;

            display::pools_table(&pools, Some(checks.as_slice())).printstd();
            println!("{registered} pools registered in {}", backends.masterchef.address());
        }
        Commands::Prices => {
            let feeds = catalog::price_feed_ids();
            let mut tokens: Vec<_> = feeds.keys().copied().collect();
            tokens.sort();

            let live = backends.coingecko.prices_usd(&tokens).await;
            let mut rows = Vec::with_capacity(tokens.len());
            for token in &tokens {
                let price = match live.get(token) {
                    Some(price) => Some(*price),
                    None => backends.prices.price_usd(token).await,
                };
                let feed = feeds.get(token).cloned().unwrap_or_else(|| token.short());
                rows.push((feed, price));
            }
            display::prices_table(&rows).printstd();
        }
        Commands::Serve { port } => {
            let service = Arc::new(backends.service(&config));
            let server = ApiServer::new(
                ServerConfig {
                    port: port.unwrap_or(config.port),
                    ..ServerConfig::default()
                },
                AppState::new(service, pools),
            );
            server.run().await.context("API server failed")?;
        }
    }

    Ok(())
}
