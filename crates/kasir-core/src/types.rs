//! # Domain Types
//!
//! Core domain types used throughout Kasir POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │   Transaction   │   │ TransactionDetail   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │◄─┐│  id             │◄──│  transaction_id     │   │
//! │  │  nama           │  ││  date           │   │  product_id ────────┼─┐ │
//! │  │  harga          │  ││  total          │   │  quantity           │ │ │
//! │  │  stok           │  ││  details[]      │   │  subtotal           │ │ │
//! │  └─────────────────┘  │└─────────────────┘   └─────────────────────┘ │ │
//! │                       └───────────────────────────────────────────────┘ │
//! │  ┌─────────────────┐                                                    │
//! │  │    Category     │   Catalog entity, not referenced by sales.        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! All ids are storage-assigned integers. An id of `0` means "not persisted
//! yet"; inbound ids on create are ignored.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// JSON field names follow the cashier frontend (`nama`, `harga`, `stok`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,

    /// Display name, also reported as the daily best seller.
    #[serde(rename = "nama")]
    pub name: String,

    /// Unit price in the smallest currency unit.
    #[serde(rename = "harga")]
    pub price: i64,

    /// Units on hand. Informational only; sales do not decrement it.
    #[serde(rename = "stok")]
    pub stock: i64,
}

impl Product {
    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price)
    }
}

/// Writable product fields (create and full update).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "nama", default)]
    pub name: String,
    #[serde(rename = "harga", default)]
    pub price: i64,
    #[serde(rename = "stok", default)]
    pub stock: i64,
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Writable category fields (create and full update).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// Transaction
// =============================================================================

/// A recorded sale: one header plus its line items.
///
/// Every field defaults when absent from the inbound JSON. A zero `total`
/// and a missing `date` are both filled in by the recorder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: i64,

    #[serde(default, with = "crate::timestamp::option")]
    pub date: Option<NaiveDateTime>,

    #[serde(default)]
    pub total: i64,

    #[serde(default)]
    pub details: Vec<TransactionDetail>,
}

impl Transaction {
    /// Sum of all line-item subtotals.
    ///
    /// Subtotals are client-supplied, so the sum is checked.
    pub fn details_total(&self) -> CoreResult<Money> {
        Money::checked_sum(self.details.iter().map(TransactionDetail::subtotal))
            .ok_or(CoreError::TotalOverflow)
    }

    /// Fills `total` from the line items when it is zero.
    ///
    /// A transaction whose items genuinely sum to zero is indistinguishable
    /// from one whose total was not provided; both end up with the computed
    /// sum. Returns `Ok(true)` if the total was computed; the transaction is
    /// left untouched on overflow.
    pub fn fill_missing_total(&mut self) -> CoreResult<bool> {
        if self.total != 0 {
            return Ok(false);
        }
        self.total = self.details_total()?.minor();
        Ok(true)
    }

    /// Fills `date` with `now` when unset and returns the effective date.
    pub fn fill_missing_date(&mut self, now: NaiveDateTime) -> NaiveDateTime {
        *self.date.get_or_insert(now)
    }

    /// Records the storage-assigned id on the header and every line item.
    ///
    /// Caller-supplied `transaction_id` values on the details are
    /// overwritten.
    pub fn assign_id(&mut self, id: i64) {
        self.id = id;
        for detail in &mut self.details {
            detail.transaction_id = id;
        }
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_minor(self.total)
    }
}

// =============================================================================
// Transaction Detail
// =============================================================================

/// A line item of a transaction.
///
/// Quantities and product references are not validated: zero or negative
/// quantities and unknown products are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TransactionDetail {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub transaction_id: i64,
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub subtotal: i64,
}

impl TransactionDetail {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_minor(self.subtotal)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
