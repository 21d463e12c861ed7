//! # checkout-core: Pure Pricing Rules for Checkout
//!
//! This crate contains the checkout calculators as pure functions with zero
//! I/O dependencies.
//!
//! ## Components
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  ★ checkout-core (THIS CRATE) ★                         │
//! │                                                                         │
//! │   ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐     │
//! │   │   order_total    │  │       cart       │  │   display_name   │     │
//! │   │  subtotal        │  │  subtotal        │  │  trim + join     │     │
//! │   │  discount        │  │  discount        │  │  "Anonymous"     │     │
//! │   │  tax             │  │  coupon          │  └──────────────────┘     │
//! │   │  total (cents)   │  │  tax, shipping   │                            │
//! │   └──────────────────┘  │  total (raw)     │                            │
//! │                         └──────────────────┘                            │
//! │                                                                         │
//! │   request: JSON → typed inputs      types / money / error: shared      │
//! │                                                                         │
//! │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line items, discount codes, shipping, coupons, options, results
//! - [`order_total`] - Order subtotal → discount → tax → total, rounded to cents
//! - [`cart`] - Cart subtotal → discount → coupon → tax → shipping → total
//! - [`display_name`] - First/last name formatting
//! - [`request`] - JSON boundary decoding with per-rule validation errors
//! - [`money`] - Cent rounding and display
//! - [`error`] - Validation and request errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, nothing kept between calls
//! 2. **No I/O**: reading input and installing loggers belong to the caller
//! 3. **Two Pipelines**: order totals and carts share data types, never rules
//! 4. **Explicit Errors**: every rejected input maps to one typed error kind
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{calculate_order_total, DiscountCode, LineItem, OrderOptions};
//!
//! let items = [LineItem::new(1200.0, 1.0)];
//! let options = OrderOptions {
//!     discount_code: DiscountCode::BigSale,
//!     ..OrderOptions::default()
//! };
//!
//! let result = calculate_order_total(&items, &options).unwrap();
//! assert_eq!(result.discount, 240.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod display_name;
pub mod error;
pub mod money;
pub mod order_total;
pub mod request;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::process_cart;
pub use display_name::display_name;
pub use error::{CheckoutError, CheckoutResult, ValidationError, ValidationResult};
pub use money::Money;
pub use order_total::calculate_order_total;
pub use request::{CartRequest, CheckoutRequest, CheckoutResponse, DisplayNameRequest, OrderRequest};
pub use types::*;
