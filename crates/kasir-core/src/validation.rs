//! # Validation Module
//!
//! Input validation for catalog writes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (axum)                                          │
//! │  └── Type validation (JSON deserialization → 400)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - catalog rules (name, price, stock)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL / CHECK constraints                                      │
//! │                                                                         │
//! │  Transactions skip Layer 2: they are recorded exactly as received.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::validation::validate_product;
//! use kasir_core::ProductInput;
//!
//! let input = ProductInput { name: "Kecap".into(), price: 12_000, stock: 20 };
//! assert!(validate_product(&input).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::{CategoryInput, ProductInput};
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an amount or count that may be zero but not negative.
pub fn validate_non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a product create/update payload.
///
/// Field names in errors match the JSON names the client sent.
pub fn validate_product(input: &ProductInput) -> ValidationResult<()> {
    validate_name("nama", &input.name)?;
    validate_non_negative("harga", input.price)?;
    validate_non_negative("stok", input.stock)?;
    Ok(())
}

/// Validates a category create/update payload.
pub fn validate_category(input: &CategoryInput) -> ValidationResult<()> {
    validate_name("name", &input.name)
}

// =============================================================================
// Unit Tests
// =============================================================================
