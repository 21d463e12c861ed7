//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── ValidationError  - Rejected calculator input (one per rule)       │
//! │  └── CheckoutError    - Request document problems + ValidationError    │
//! │                                                                         │
//! │  checkout-cli errors (separate crate)                                  │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → anyhow (main) → exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Each variant corresponds to exactly one precondition
//! 3. Errors are enum variants, never String
//! 4. There is no recoverable/fatal split: every failure is a rejection

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures reported by the calculators.
///
/// Both pipelines check their preconditions in a fixed order and stop at the
/// first violation, so a single call yields at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The item list is missing, not a sequence, or empty.
    #[error("Items must be a non-empty array")]
    InvalidItems,

    /// The options value is not a key/value structure.
    #[error("Options must be an object")]
    InvalidOptions,

    /// The discount code is present but is not a string.
    #[error("Discount code must be a string")]
    InvalidDiscountCode,

    /// The tax rate is not a non-negative number.
    #[error("Tax rate must be a non-negative number")]
    InvalidTaxRate,

    /// The shipping method is not one of `standard`, `express`, `pickup`.
    #[error("Invalid shipping method")]
    InvalidShippingMethod,

    /// An item's price or quantity is not a number.
    ///
    /// `index` is the zero-based position of the first offending item.
    #[error("Item {index}: price and quantity must be numbers")]
    InvalidItemType { index: usize },

    /// An item's price or quantity is negative (order totals only).
    #[error("Item {index}: invalid price or quantity")]
    InvalidItemValue { index: usize },
}

impl ValidationError {
    /// Stable snake_case identifier for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidItems => "invalid_items",
            ValidationError::InvalidOptions => "invalid_options",
            ValidationError::InvalidDiscountCode => "invalid_discount_code",
            ValidationError::InvalidTaxRate => "invalid_tax_rate",
            ValidationError::InvalidShippingMethod => "invalid_shipping_method",
            ValidationError::InvalidItemType { .. } => "invalid_item_type",
            ValidationError::InvalidItemValue { .. } => "invalid_item_value",
        }
    }
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors from decoding and evaluating a whole request document.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The document is not valid JSON or misses a required member.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The `operation` tag names no known calculator.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The calculator rejected its input.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        CheckoutError::MalformedRequest(err.to_string())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for calculator operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
