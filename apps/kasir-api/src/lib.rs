//! # Kasir API
//!
//! HTTP server for the Kasir POS backend.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Kasir API Routes                              │
//! │                                                                         │
//! │  GET    /health                        database ping                   │
//! │                                                                         │
//! │  GET    /api/products                  ┐                               │
//! │  POST   /api/products                  │ catalog CRUD                  │
//! │  GET    /api/products/{id}             │ (same shape for               │
//! │  PUT    /api/products/{id}             │  /api/categories)             │
//! │  DELETE /api/products/{id}             ┘                               │
//! │                                                                         │
//! │  POST   /api/transactions              record a sale (atomic)          │
//! │  GET    /api/transactions/{id}         read back with line items       │
//! │                                                                         │
//! │  GET    /api/report/hari-ini           today's report                  │
//! │  GET    /api/report?date=YYYY-MM-DD    report for a date               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HOST` - Listen address (default: 0.0.0.0)
//! - `PORT` - HTTP port (default: 8080)
//! - `DATABASE_PATH` - SQLite file (default: kasir.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT_SECS` - Pool acquire timeout (default: 30)
//! - `RUST_LOG` - Log filter

pub mod api;
pub mod config;
pub mod error;

use axum::Router;
use tower_http::trace::TraceLayer;

use kasir_db::Database;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,kasir=debug,sqlx=warn,tower_http=info";

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::health::router())
        .merge(api::products::router())
        .merge(api::categories::router())
        .merge(api::transactions::router())
        .merge(api::reports::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
