//! # Domain Types
//!
//! The typed data model shared by the checkout calculators.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Inputs                                  Outputs                        │
//! │  ┌─────────────────┐                     ┌─────────────────┐           │
//! │  │    LineItem     │                     │   OrderTotal    │           │
//! │  │  price          │                     │  (rounded)      │           │
//! │  │  quantity       │                     └─────────────────┘           │
//! │  └─────────────────┘                     ┌─────────────────┐           │
//! │  ┌─────────────────┐ ┌────────────────┐  │   CartTotal     │           │
//! │  │  OrderOptions   │ │  CartOptions   │  │  (unrounded)    │           │
//! │  │  discount_code  │ │  + shipping    │  └─────────────────┘           │
//! │  │  tax_rate       │ │  + coupon      │                                │
//! │  └─────────────────┘ └────────────────┘                                │
//! │                                                                         │
//! │  Closed sets: DiscountCode, ShippingMethod, Coupon                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are persisted; each call builds fresh values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Line Item
// =============================================================================

/// One line of an order or cart: a unit price and a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub price: f64,
    pub quantity: f64,
}

impl LineItem {
    /// Creates a line item.
    #[inline]
    pub const fn new(price: f64, quantity: f64) -> Self {
        LineItem { price, quantity }
    }

    /// Price × quantity.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity
    }

    /// Both figures are real numbers (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.price.is_finite() && self.quantity.is_finite()
    }

    /// Either figure is below zero.
    #[inline]
    pub fn has_negative(&self) -> bool {
        self.price < 0.0 || self.quantity < 0.0
    }
}

/// Sums `price × quantity` over the items, left to right.
pub(crate) fn subtotal(items: &[LineItem]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + item.line_total())
}

// =============================================================================
// Discount Code
// =============================================================================

/// A promotional code from the closed set of known codes.
///
/// Parsing never fails: anything unrecognized, including the empty string,
/// becomes [`DiscountCode::None`] and grants no discount. What each code is
/// worth is decided by the calculator that applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiscountCode {
    Welcome10,
    FreeShip,
    BigSale,
    #[default]
    None,
}

impl DiscountCode {
    /// Maps a code token to its variant, falling back to `None`.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::DiscountCode;
    ///
    /// assert_eq!(DiscountCode::from_code("BIGSALE"), DiscountCode::BigSale);
    /// assert_eq!(DiscountCode::from_code("bigsale"), DiscountCode::None);
    /// assert_eq!(DiscountCode::from_code(""), DiscountCode::None);
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code {
            "WELCOME10" => DiscountCode::Welcome10,
            "FREESHIP" => DiscountCode::FreeShip,
            "BIGSALE" => DiscountCode::BigSale,
            _ => DiscountCode::None,
        }
    }

    /// The canonical token (`""` for `None`).
    pub const fn as_code(&self) -> &'static str {
        match self {
            DiscountCode::Welcome10 => "WELCOME10",
            DiscountCode::FreeShip => "FREESHIP",
            DiscountCode::BigSale => "BIGSALE",
            DiscountCode::None => "",
        }
    }
}

impl From<String> for DiscountCode {
    fn from(code: String) -> Self {
        DiscountCode::from_code(&code)
    }
}

impl From<DiscountCode> for String {
    fn from(code: DiscountCode) -> Self {
        code.as_code().to_string()
    }
}

impl fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// How a cart is delivered. Unlike discount codes, unknown methods are
/// rejected rather than ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
    Pickup,
}

impl ShippingMethod {
    /// Flat shipping charge for this method.
    pub const fn cost(&self) -> f64 {
        match self {
            ShippingMethod::Standard => 20.0,
            ShippingMethod::Express => 50.0,
            ShippingMethod::Pickup => 0.0,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::Pickup => "pickup",
        }
    }
}

impl FromStr for ShippingMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ShippingMethod::Standard),
            "express" => Ok(ShippingMethod::Express),
            "pickup" => Ok(ShippingMethod::Pickup),
            _ => Err(ValidationError::InvalidShippingMethod),
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A structured promotional adjustment, applied on top of a discount code.
///
/// Serialized as `{"type": "flat", "amount": 20}` or
/// `{"type": "percent", "amount": 10}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Coupon {
    /// A fixed amount off.
    Flat { amount: f64 },
    /// A percentage of the subtotal off (`10` means 10 %).
    Percent { amount: f64 },
}

impl Coupon {
    /// The coupon's worth against a given subtotal.
    pub fn value(&self, subtotal: f64) -> f64 {
        match self {
            Coupon::Flat { amount } => *amount,
            Coupon::Percent { amount } => (subtotal * amount) / 100.0,
        }
    }
}

// =============================================================================
// Options
// =============================================================================

/// Options for the order total calculator. Missing fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderOptions {
    /// Defaults to no code.
    #[ts(as = "String")]
    pub discount_code: DiscountCode,

    /// Percentage, e.g. `7.5`. Defaults to `0`.
    pub tax_rate: f64,
}

/// Options for the cart processor. Missing fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct CartOptions {
    #[ts(as = "String")]
    pub discount_code: DiscountCode,

    pub tax_rate: f64,

    /// Defaults to `standard`.
    pub shipping_method: ShippingMethod,

    pub coupon: Option<Coupon>,
}

// =============================================================================
// Results
// =============================================================================

/// Order totals, every field rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotal {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
}

/// Cart totals as computed, without rounding.
///
/// `total = subtotal - discount - coupon_value + tax + shipping_cost`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotal {
    pub subtotal: f64,
    pub discount: f64,
    pub coupon_value: f64,
    pub tax: f64,
    pub shipping_cost: f64,
    pub total: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
