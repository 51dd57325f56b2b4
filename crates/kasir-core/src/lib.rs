//! # kasir-core: Pure Business Logic for Kasir POS
//!
//! This crate holds the domain model of the cashier backend as pure data
//! and pure functions. Nothing in here touches the database, the network
//! or the wall clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kasir-api (axum)                             │   │
//! │  │   /api/products  /api/categories  /api/transactions  /report   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  report   │  │ validation│  │   │
//! │  │   │Transaction│  │   Money   │  │ DayWindow │  │  catalog  │  │   │
//! │  │   │  Product  │  │  Sum      │  │DailyReport│  │  rules    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kasir-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Transaction, Product, Category)
//! - [`money`] - Integer money in the smallest currency unit
//! - [`report`] - Daily report model and day window arithmetic
//! - [`timestamp`] - Lenient JSON encoding for transaction dates
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::{Transaction, TransactionDetail};
//!
//! let mut tx = Transaction {
//!     details: vec![
//!         TransactionDetail { product_id: 1, quantity: 2, subtotal: 7000, ..Default::default() },
//!         TransactionDetail { product_id: 2, quantity: 1, subtotal: 3000, ..Default::default() },
//!     ],
//!     ..Default::default()
//! };
//!
//! // A zero total means "compute it from the line items"
//! tx.fill_missing_total().unwrap();
//! assert_eq!(tx.total, 10_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod timestamp;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use report::{BestSeller, DailyReport, DayWindow};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product or category name.
pub const MAX_NAME_LEN: usize = 255;
