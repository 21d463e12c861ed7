//! # Cart Processor
//!
//! Computes the full cart total: discount code, coupon, tax and shipping.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► validate ──► subtotal ──► discount ──► coupon ──► tax       │
//! │                                                               │         │
//! │                                          total ◄── shipping ◄─┘         │
//! │                                                                         │
//! │  tax   = (subtotal - discount - coupon) × rate / 100                   │
//! │  total =  subtotal - discount - coupon + tax + shipping                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike the order total calculator, values come back exactly as computed
//! (no rounding) and negative prices or quantities are not rejected.
//!
//! ## Discount Rules
//! | Code        | Discount                           |
//! |-------------|------------------------------------|
//! | `WELCOME10` | 10 % of subtotal                   |
//! | `FREESHIP`  | flat 50                            |
//! | `BIGSALE`   | flat 100 when subtotal > 500       |
//! | other       | none                               |

use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{subtotal, CartOptions, CartTotal, DiscountCode, LineItem};

/// Subtotal above which `BIGSALE` applies.
const BIGSALE_THRESHOLD: f64 = 500.0;

/// Flat `BIGSALE` discount.
const BIGSALE_AMOUNT: f64 = 100.0;

/// Computes the cart totals.
///
/// ## Validation
/// 1. `items` is non-empty → [`ValidationError::InvalidItems`]
/// 2. `tax_rate` is a non-negative number → [`ValidationError::InvalidTaxRate`]
/// 3. every price and quantity is a number → [`ValidationError::InvalidItemType`]
///
/// The shipping method is already one of the known methods by type; unknown
/// method strings are turned away when the request is decoded.
///
/// ## Example
/// ```rust
/// use checkout_core::{process_cart, CartOptions, Coupon, DiscountCode, LineItem, ShippingMethod};
///
/// let items = [LineItem::new(200.0, 1.0)];
/// let options = CartOptions {
///     discount_code: DiscountCode::Welcome10,
///     tax_rate: 10.0,
///     shipping_method: ShippingMethod::Express,
///     coupon: Some(Coupon::Flat { amount: 20.0 }),
/// };
///
/// let result = process_cart(&items, &options).unwrap();
/// assert_eq!(result.total, 226.0);
/// ```
pub fn process_cart(items: &[LineItem], options: &CartOptions) -> ValidationResult<CartTotal> {
    if items.is_empty() {
        return Err(ValidationError::InvalidItems);
    }

    if !(options.tax_rate.is_finite() && options.tax_rate >= 0.0) {
        return Err(ValidationError::InvalidTaxRate);
    }

    if let Some(index) = items.iter().position(|item| !item.is_finite()) {
        return Err(ValidationError::InvalidItemType { index });
    }

    let subtotal = subtotal(items);
    let discount = discount_for(options.discount_code, subtotal);
    let coupon_value = options
        .coupon
        .map_or(0.0, |coupon| coupon.value(subtotal));

    let tax = (subtotal - discount - coupon_value) * (options.tax_rate / 100.0);
    let shipping_cost = options.shipping_method.cost();
    let total = subtotal - discount - coupon_value + tax + shipping_cost;

    debug!(
        items = items.len(),
        code = %options.discount_code,
        shipping = %options.shipping_method,
        subtotal,
        discount,
        coupon_value,
        tax,
        shipping_cost,
        total,
        "Processed cart"
    );

    Ok(CartTotal {
        subtotal,
        discount,
        coupon_value,
        tax,
        shipping_cost,
        total,
    })
}

fn discount_for(code: DiscountCode, subtotal: f64) -> f64 {
    match code {
        DiscountCode::Welcome10 => subtotal * 0.1,
        DiscountCode::FreeShip => 50.0,
        DiscountCode::BigSale if subtotal > BIGSALE_THRESHOLD => BIGSALE_AMOUNT,
        DiscountCode::BigSale | DiscountCode::None => 0.0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coupon, ShippingMethod};
    use proptest::prelude::*;

    fn one(price: f64) -> [LineItem; 1] {
        [LineItem::new(price, 1.0)]
    }

    fn with_code(code: &str) -> CartOptions {
        CartOptions {
            discount_code: DiscountCode::from_code(code),
            ..CartOptions::default()
        }
    }

    // --- Validation ---

    #[test]
    fn test_rejects_empty_items() {
        assert_eq!(
            process_cart(&[], &CartOptions::default()),
            Err(ValidationError::InvalidItems)
        );
    }

    #[test]
    fn test_rejects_negative_tax_rate() {
        let options = CartOptions {
            tax_rate: -5.0,
            ..CartOptions::default()
        };
        assert_eq!(
            process_cart(&one(10.0), &options),
            Err(ValidationError::InvalidTaxRate)
        );
    }

    #[test]
    fn test_rejects_non_numeric_item() {
        let items = [LineItem::new(10.0, 2.0), LineItem::new(10.0, f64::INFINITY)];
        assert_eq!(
            process_cart(&items, &CartOptions::default()),
            Err(ValidationError::InvalidItemType { index: 1 })
        );
    }

    #[test]
    fn test_negative_values_pass_through() {
        let items = [LineItem::new(-10.0, 2.0)];
        let result = process_cart(&items, &CartOptions::default()).unwrap();
        assert_eq!(result.subtotal, -20.0);
        assert_eq!(result.total, 0.0);
    }

    // --- Subtotal ---

    #[test]
    fn test_subtotal() {
        let items = [LineItem::new(100.0, 2.0), LineItem::new(50.0, 1.0)];
        let result = process_cart(&items, &CartOptions::default()).unwrap();
        assert_eq!(result.subtotal, 250.0);
    }

    // --- Discount Codes ---

    #[test]
    fn test_discount_codes() {
        let items = one(100.0);

        assert_eq!(process_cart(&items, &with_code("WELCOME10")).unwrap().discount, 10.0);
        assert_eq!(process_cart(&items, &with_code("FREESHIP")).unwrap().discount, 50.0);
        assert_eq!(process_cart(&items, &with_code("INVALID")).unwrap().discount, 0.0);

        let over = process_cart(&one(600.0), &with_code("BIGSALE")).unwrap();
        assert_eq!(over.discount, 100.0);

        let under = process_cart(&one(300.0), &with_code("BIGSALE")).unwrap();
        assert_eq!(under.discount, 0.0);

        let at = process_cart(&one(500.0), &with_code("BIGSALE")).unwrap();
        assert_eq!(at.discount, 0.0);
    }

    // --- Coupons ---

    #[test]
    fn test_coupons() {
        let items = one(200.0);

        let flat = CartOptions {
            coupon: Some(Coupon::Flat { amount: 20.0 }),
            ..CartOptions::default()
        };
        assert_eq!(process_cart(&items, &flat).unwrap().coupon_value, 20.0);

        let percent = CartOptions {
            coupon: Some(Coupon::Percent { amount: 10.0 }),
            ..CartOptions::default()
        };
        assert_eq!(process_cart(&items, &percent).unwrap().coupon_value, 20.0);
    }

    #[test]
    fn test_no_coupon() {
        let result = process_cart(&one(100.0), &CartOptions::default()).unwrap();
        assert_eq!(result.coupon_value, 0.0);
    }

    #[test]
    fn test_coupon_reduces_taxable_amount() {
        let options = CartOptions {
            tax_rate: 10.0,
            coupon: Some(Coupon::Flat { amount: 50.0 }),
            ..CartOptions::default()
        };
        let result = process_cart(&one(150.0), &options).unwrap();
        assert_eq!(result.tax, 10.0);
    }

    // --- Tax ---

    #[test]
    fn test_tax() {
        let options = CartOptions {
            tax_rate: 10.0,
            ..CartOptions::default()
        };
        assert_eq!(process_cart(&one(100.0), &options).unwrap().tax, 10.0);
    }

    // --- Shipping ---

    #[test]
    fn test_shipping_costs() {
        let items = one(100.0);
        for (method, cost) in [
            (ShippingMethod::Standard, 20.0),
            (ShippingMethod::Express, 50.0),
            (ShippingMethod::Pickup, 0.0),
        ] {
            let options = CartOptions {
                shipping_method: method,
                ..CartOptions::default()
            };
            assert_eq!(process_cart(&items, &options).unwrap().shipping_cost, cost);
        }
    }

    // --- Total ---

    #[test]
    fn test_total_with_all_factors() {
        // subtotal 200, discount 20, coupon 20, taxable 160, tax 16, shipping 50
        let options = CartOptions {
            discount_code: DiscountCode::Welcome10,
            tax_rate: 10.0,
            shipping_method: ShippingMethod::Express,
            coupon: Some(Coupon::Flat { amount: 20.0 }),
        };
        let result = process_cart(&one(200.0), &options).unwrap();
        assert_eq!(result.total, 226.0);
    }

    #[test]
    fn test_default_path() {
        let result = process_cart(&[LineItem::new(50.0, 2.0)], &CartOptions::default()).unwrap();
        assert_eq!(
            result,
            CartTotal {
                subtotal: 100.0,
                discount: 0.0,
                coupon_value: 0.0,
                tax: 0.0,
                shipping_cost: 20.0,
                total: 120.0,
            }
        );
    }

    #[test]
    fn test_not_rounded() {
        let options = CartOptions {
            tax_rate: 7.5,
            shipping_method: ShippingMethod::Pickup,
            ..CartOptions::default()
        };
        let result = process_cart(&one(333.3333), &options).unwrap();
        assert_eq!(result.subtotal, 333.3333);
        assert_eq!(result.tax, 333.3333 * (7.5 / 100.0));
    }

    // --- Properties ---

    proptest! {
        #[test]
        fn prop_total_identity(
            price in 0.0f64..5_000.0,
            qty in 0u32..50,
            tax_rate in 0.0f64..30.0,
        ) {
            let items = [LineItem::new(price, qty as f64)];
            let options = CartOptions { tax_rate, ..CartOptions::default() };
            let r = process_cart(&items, &options).unwrap();
            let expected = r.subtotal - r.discount - r.coupon_value + r.tax + r.shipping_cost;
            prop_assert_eq!(r.total, expected);
        }

        #[test]
        fn prop_deterministic(price in -100.0f64..5_000.0, qty in -5i32..50) {
            let items = [LineItem::new(price, qty as f64)];
            let options = with_code("WELCOME10");
            prop_assert_eq!(process_cart(&items, &options), process_cart(&items, &options));
        }
    }
}
