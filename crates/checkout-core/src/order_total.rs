//! # Order Total Calculator
//!
//! Computes subtotal, discount, tax and total for an order, rounded to cents.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► validate ──► subtotal ──► discount ──► tax ──► total        │
//! │                          Σ p×q       by code      on       taxable     │
//! │                                                  taxable   + tax       │
//! │                                                                         │
//! │  taxable = subtotal - discount                                         │
//! │  every output field is rounded to cents independently                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount Rules
//! | Code        | Discount                                 |
//! |-------------|------------------------------------------|
//! | `WELCOME10` | 10 % of subtotal                         |
//! | `FREESHIP`  | flat 50                                  |
//! | `BIGSALE`   | 20 % of subtotal when subtotal > 1000    |
//! | other       | none                                     |
//!
//! These rules belong to this calculator alone; the cart processor has its
//! own table with different thresholds.

use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::money::round_to_cents;
use crate::types::{subtotal, DiscountCode, LineItem, OrderOptions, OrderTotal};

/// Subtotal above which `BIGSALE` applies.
const BIGSALE_THRESHOLD: f64 = 1000.0;

/// Computes the rounded order totals.
///
/// ## Validation
/// Checked in this order, stopping at the first failure:
/// 1. `items` is non-empty → [`ValidationError::InvalidItems`]
/// 2. `tax_rate` is a non-negative number → [`ValidationError::InvalidTaxRate`]
/// 3. item by item: price and quantity are numbers →
///    [`ValidationError::InvalidItemType`], then neither is negative →
///    [`ValidationError::InvalidItemValue`]
///
/// ## Example
/// ```rust
/// use checkout_core::{calculate_order_total, DiscountCode, LineItem, OrderOptions};
///
/// let items = [LineItem::new(1000.0, 1.0)];
/// let options = OrderOptions {
///     discount_code: DiscountCode::Welcome10,
///     tax_rate: 10.0,
/// };
///
/// let result = calculate_order_total(&items, &options).unwrap();
/// assert_eq!(result.discount, 100.0);
/// assert_eq!(result.tax, 90.0);
/// assert_eq!(result.total, 990.0);
/// ```
pub fn calculate_order_total(
    items: &[LineItem],
    options: &OrderOptions,
) -> ValidationResult<OrderTotal> {
    if items.is_empty() {
        return Err(ValidationError::InvalidItems);
    }

    if !is_valid_tax_rate(options.tax_rate) {
        return Err(ValidationError::InvalidTaxRate);
    }

    for (index, item) in items.iter().enumerate() {
        if !item.is_finite() {
            return Err(ValidationError::InvalidItemType { index });
        }
        if item.has_negative() {
            return Err(ValidationError::InvalidItemValue { index });
        }
    }

    let subtotal = subtotal(items);
    let discount = discount_for(options.discount_code, subtotal);

    let taxable_amount = subtotal - discount;
    let tax = taxable_amount * (options.tax_rate / 100.0);
    let total = taxable_amount + tax;

    debug!(
        items = items.len(),
        code = %options.discount_code,
        subtotal,
        discount,
        tax,
        total,
        "Computed order total"
    );

    Ok(OrderTotal {
        subtotal: round_to_cents(subtotal),
        discount: round_to_cents(discount),
        tax: round_to_cents(tax),
        total: round_to_cents(total),
    })
}

fn discount_for(code: DiscountCode, subtotal: f64) -> f64 {
    match code {
        DiscountCode::Welcome10 => subtotal * 0.1,
        DiscountCode::FreeShip => 50.0,
        DiscountCode::BigSale if subtotal > BIGSALE_THRESHOLD => subtotal * 0.2,
        DiscountCode::BigSale | DiscountCode::None => 0.0,
    }
}

fn is_valid_tax_rate(rate: f64) -> bool {
    rate.is_finite() && rate >= 0.0
}

// =============================================================================
// Unit Tests
// =============================================================================
