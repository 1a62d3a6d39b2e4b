//! HTTP boundary for wallet valuation.
//!
//! This crate exposes the portfolio service over a small REST API:
//! - `GET /health` liveness check
//! - `GET /wallet/{address}` ranked positions of a wallet
//!
//! Error kinds map to status codes: malformed input is `400`, an
//! unreachable chain is `503` and a timed out request is `504`.

/// Prelude module for convenient imports.
pub mod prelude;

/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Application state.
pub mod state;

pub use error::ApiError;
pub use server::{ApiServer, ServerConfig};
pub use state::{AppState, WalletService};
