//! # Repository Module
//!
//! Database repository implementations for Kasir POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.transactions().create(&mut tx)                             │
//! │       ▼                                                                 │
//! │  TransactionRepository                                                 │
//! │  ├── create(&self, &mut tx)     header + details, one unit of work     │
//! │  └── get_by_id(&self, id)                                              │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  SQL is isolated here; handlers never build queries.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`TransactionRepository`](transaction::TransactionRepository) - Transaction recording
//! - [`ReportRepository`](report::ReportRepository) - Daily sales report
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD
//! - [`CategoryRepository`](category::CategoryRepository) - Category CRUD

pub mod category;
pub mod product;
pub mod report;
pub mod transaction;

#[cfg(test)]
pub(crate) mod test_support;
