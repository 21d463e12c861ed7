//! # Request Decoding
//!
//! Turns loosely-typed JSON input into the typed calculator inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON boundary (THIS MODULE)                                  │
//! │  ├── Shape checks: array? object? string? number?                      │
//! │  ├── One ValidationError kind per rule, first failure wins             │
//! │  └── Output: LineItem / OrderOptions / CartOptions                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculator (order_total / cart)                              │
//! │  ├── Same rules restated over typed values (empty, NaN, negative)      │
//! │  └── Pure arithmetic                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two calculators do not agree on every rule and this module keeps
//! them apart:
//!
//! | Rule                        | order total            | cart                 |
//! |-----------------------------|------------------------|----------------------|
//! | `discountCode: null/false/0`| treated as no code     | `InvalidDiscountCode`|
//! | negative price / quantity   | `InvalidItemValue`     | accepted             |
//! | `shippingMethod`, `coupon`  | ignored                | decoded              |
//!
//! ## Usage
//! ```rust
//! use checkout_core::request::CartRequest;
//! use serde_json::json;
//!
//! let items = json!([{ "price": 50, "quantity": 2 }]);
//! let request = CartRequest::from_json(&items, None).unwrap();
//! assert_eq!(request.evaluate().unwrap().total, 120.0);
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::cart::process_cart;
use crate::display_name::display_name;
use crate::error::{CheckoutError, CheckoutResult, ValidationError, ValidationResult};
use crate::order_total::calculate_order_total;
use crate::types::{
    CartOptions, CartTotal, Coupon, DiscountCode, LineItem, OrderOptions, OrderTotal,
    ShippingMethod,
};

// =============================================================================
// Order Total Request
// =============================================================================

/// Decoded input for [`calculate_order_total`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub items: Vec<LineItem>,
    pub options: OrderOptions,
}

impl OrderRequest {
    /// Decodes the item list and optional options object.
    ///
    /// Passing `None` for `options` means "not supplied" and yields the
    /// defaults; passing `Some(&Value::Null)` is rejected.
    pub fn from_json(items: &Value, options: Option<&Value>) -> ValidationResult<Self> {
        let raw_items = require_items(items)?;
        let empty = Map::new();
        let options = match options {
            None => &empty,
            Some(value) => value.as_object().ok_or(ValidationError::InvalidOptions)?,
        };

        let discount_code = match options.get("discountCode") {
            None => DiscountCode::None,
            Some(Value::String(code)) => DiscountCode::from_code(code),
            Some(value) if is_falsy(value) => DiscountCode::None,
            Some(_) => return Err(ValidationError::InvalidDiscountCode),
        };
        let tax_rate = decode_tax_rate(options)?;

        let mut items = Vec::with_capacity(raw_items.len());
        for (index, raw) in raw_items.iter().enumerate() {
            let item = decode_item(index, raw)?;
            if item.has_negative() {
                return Err(ValidationError::InvalidItemValue { index });
            }
            items.push(item);
        }

        Ok(OrderRequest {
            items,
            options: OrderOptions {
                discount_code,
                tax_rate,
            },
        })
    }

    pub fn evaluate(&self) -> ValidationResult<OrderTotal> {
        calculate_order_total(&self.items, &self.options)
    }
}

// =============================================================================
// Cart Request
// =============================================================================

/// Decoded input for [`process_cart`].
#[derive(Debug, Clone, PartialEq)]
pub struct CartRequest {
    pub items: Vec<LineItem>,
    pub options: CartOptions,
}

impl CartRequest {
    /// Decodes the item list and optional options object.
    ///
    /// A coupon that is not a well-formed `flat`/`percent` object is dropped
    /// rather than rejected.
    pub fn from_json(items: &Value, options: Option<&Value>) -> ValidationResult<Self> {
        let raw_items = require_items(items)?;
        let empty = Map::new();
        // An array is accepted here and carries no option members.
        let options = match options {
            None | Some(Value::Array(_)) => &empty,
            Some(value) => value.as_object().ok_or(ValidationError::InvalidOptions)?,
        };

        let discount_code = match options.get("discountCode") {
            None => DiscountCode::None,
            Some(Value::String(code)) => DiscountCode::from_code(code),
            Some(_) => return Err(ValidationError::InvalidDiscountCode),
        };
        let tax_rate = decode_tax_rate(options)?;
        let shipping_method = match options.get("shippingMethod") {
            None => ShippingMethod::default(),
            Some(Value::String(method)) => method.parse()?,
            Some(_) => return Err(ValidationError::InvalidShippingMethod),
        };

        let items = raw_items
            .iter()
            .enumerate()
            .map(|(index, raw)| decode_item(index, raw))
            .collect::<ValidationResult<Vec<_>>>()?;

        Ok(CartRequest {
            items,
            options: CartOptions {
                discount_code,
                tax_rate,
                shipping_method,
                coupon: decode_coupon(options.get("coupon")),
            },
        })
    }

    pub fn evaluate(&self) -> ValidationResult<CartTotal> {
        process_cart(&self.items, &self.options)
    }
}

// =============================================================================
// Display Name Request
// =============================================================================

/// Decoded input for [`display_name`]. Non-string parts count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayNameRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl DisplayNameRequest {
    pub fn from_json(value: &Value) -> Self {
        let part = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        DisplayNameRequest {
            first_name: part("firstName"),
            last_name: part("lastName"),
        }
    }

    pub fn evaluate(&self) -> String {
        display_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

// =============================================================================
// Request Documents
// =============================================================================

/// A whole request document, tagged by `operation`.
///
/// ```json
/// { "operation": "cart", "items": [...], "options": {...} }
/// { "operation": "order_total", "items": [...] }
/// { "operation": "display_name", "firstName": "Ada", "lastName": "Lovelace" }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutRequest {
    OrderTotal(OrderRequest),
    Cart(CartRequest),
    DisplayName(DisplayNameRequest),
}

/// The result of evaluating a [`CheckoutRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckoutResponse {
    OrderTotal(OrderTotal),
    Cart(CartTotal),
    DisplayName {
        #[serde(rename = "displayName")]
        display_name: String,
    },
}

impl CheckoutRequest {
    /// Parses and decodes a JSON request document.
    pub fn parse(input: &str) -> CheckoutResult<Self> {
        let document: Value = serde_json::from_str(input)?;
        Self::from_json(&document)
    }

    /// Decodes an already-parsed request document.
    ///
    /// A missing `items` member is reported as
    /// [`ValidationError::InvalidItems`], the same as an empty list.
    pub fn from_json(document: &Value) -> CheckoutResult<Self> {
        let operation = document
            .get("operation")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                CheckoutError::MalformedRequest("missing string member `operation`".to_string())
            })?;

        let items = document.get("items").unwrap_or(&Value::Null);
        let options = document.get("options");

        match operation {
            "order_total" => Ok(CheckoutRequest::OrderTotal(OrderRequest::from_json(
                items, options,
            )?)),
            "cart" => Ok(CheckoutRequest::Cart(CartRequest::from_json(items, options)?)),
            "display_name" => Ok(CheckoutRequest::DisplayName(DisplayNameRequest::from_json(
                document,
            ))),
            other => Err(CheckoutError::UnknownOperation(other.to_string())),
        }
    }

    pub fn evaluate(&self) -> ValidationResult<CheckoutResponse> {
        Ok(match self {
            CheckoutRequest::OrderTotal(request) => CheckoutResponse::OrderTotal(request.evaluate()?),
            CheckoutRequest::Cart(request) => CheckoutResponse::Cart(request.evaluate()?),
            CheckoutRequest::DisplayName(request) => CheckoutResponse::DisplayName {
                display_name: request.evaluate(),
            },
        })
    }
}

// =============================================================================
// Field Decoders
// =============================================================================

fn require_items(items: &Value) -> ValidationResult<&Vec<Value>> {
    match items.as_array() {
        Some(list) if !list.is_empty() => Ok(list),
        _ => Err(ValidationError::InvalidItems),
    }
}

/// Absent means zero; anything present must be a non-negative number.
fn decode_tax_rate(options: &Map<String, Value>) -> ValidationResult<f64> {
    match options.get("taxRate") {
        None => Ok(0.0),
        Some(value) => value
            .as_f64()
            .filter(|rate| *rate >= 0.0)
            .ok_or(ValidationError::InvalidTaxRate),
    }
}

fn decode_item(index: usize, raw: &Value) -> ValidationResult<LineItem> {
    let price = raw.get("price").and_then(Value::as_f64);
    let quantity = raw.get("quantity").and_then(Value::as_f64);
    match (price, quantity) {
        (Some(price), Some(quantity)) => Ok(LineItem::new(price, quantity)),
        _ => Err(ValidationError::InvalidItemType { index }),
    }
}

fn decode_coupon(raw: Option<&Value>) -> Option<Coupon> {
    let raw = match raw {
        None | Some(Value::Null) => return None,
        Some(raw) => raw,
    };

    let amount = raw.get("amount").and_then(Value::as_f64);
    let coupon = match (raw.get("type").and_then(Value::as_str), amount) {
        (Some("flat"), Some(amount)) => Some(Coupon::Flat { amount }),
        (Some("percent"), Some(amount)) => Some(Coupon::Percent { amount }),
        _ => None,
    };

    if coupon.is_none() {
        warn!(coupon = %raw, "Ignoring malformed coupon");
    }
    coupon
}

/// JSON values that count as "not supplied" for an order discount code.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
