//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use farm_positions_api::prelude::*;
//! ```

pub use crate::error::ApiError;
pub use crate::handlers::{HealthResponse, WalletResponse};
pub use crate::routes::create_router;
pub use crate::server::{ApiServer, ServerConfig};
pub use crate::state::{AppState, WalletService};
