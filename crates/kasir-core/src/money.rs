//! # Money Module
//!
//! Provides the `Money` type for amounts in the smallest currency unit.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every amount in the system is a whole number of the smallest unit.     │
//! │                                                                         │
//! │    Indomie Godog × 2 → subtotal 7000                                    │
//! │    Vit 1000ml    × 1 → subtotal 3000                                    │
//! │                         ─────────────                                   │
//! │    transaction total      10000   (exact, no rounding anywhere)         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! let subtotals = [Money::from_minor(7000), Money::from_minor(3000)];
//! let total = Money::checked_sum(subtotals).unwrap();
//! assert_eq!(total.minor(), 10_000);
//! assert_eq!(total.to_string(), "Rp 10.000");
//!
//! // Amounts come straight from client JSON, so sums can overflow
//! assert!(Money::from_minor(i64::MAX).checked_add(Money::from_minor(1)).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest currency unit.
///
/// Signed so that refunds or corrections can be represented, although
/// nothing in the recorder rejects negative line items either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    #[inline]
    pub const fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }

    /// Sums amounts, `None` if any partial sum overflows.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), Money::checked_add)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Rupiah-style display with `.` as thousands separator (`Rp 12.000`).
///
/// Used in log lines; clients receive raw integers.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp {}", sign, grouped)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
