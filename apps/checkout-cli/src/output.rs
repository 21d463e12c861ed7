//! Rendering of calculator results and validation failures.

use std::str::FromStr;

use checkout_core::{CartTotal, CheckoutResponse, Money, OrderTotal, ValidationError};
use clap::ValueEnum;
use serde::Serialize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable JSON document
    Json,
    /// Receipt-style lines
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    message: &'a str,
}

/// Renders a successful result.
pub fn render(response: &CheckoutResponse, format: OutputFormat, pretty: bool) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => to_json(response, pretty),
        OutputFormat::Text => Ok(match response {
            CheckoutResponse::OrderTotal(total) => order_receipt(total),
            CheckoutResponse::Cart(total) => cart_receipt(total),
            CheckoutResponse::DisplayName { display_name } => display_name.clone(),
        }),
    }
}

/// Renders a validation failure.
pub fn render_error(err: &ValidationError, format: OutputFormat, pretty: bool) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => {
            let message = err.to_string();
            to_json(
                &ErrorBody {
                    error: err.kind(),
                    message: &message,
                },
                pretty,
            )
        }
        OutputFormat::Text => Ok(format!("error: {err}")),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn line(label: &str, amount: Money) -> String {
    format!("{:<10}{:>14}", label, amount.to_string())
}

fn order_receipt(total: &OrderTotal) -> String {
    [
        line("Subtotal", Money::from_amount(total.subtotal)),
        line("Discount", -Money::from_amount(total.discount)),
        line("Tax", Money::from_amount(total.tax)),
        line("Total", Money::from_amount(total.total)),
    ]
    .join("\n")
}

fn cart_receipt(total: &CartTotal) -> String {
    [
        line("Subtotal", Money::from_amount(total.subtotal)),
        line("Discount", -Money::from_amount(total.discount)),
        line("Coupon", -Money::from_amount(total.coupon_value)),
        line("Tax", Money::from_amount(total.tax)),
        line("Shipping", Money::from_amount(total.shipping_cost)),
        line("Total", Money::from_amount(total.total)),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> CheckoutResponse {
        CheckoutResponse::OrderTotal(OrderTotal {
            subtotal: 1000.0,
            discount: 100.0,
            tax: 90.0,
            total: 990.0,
        })
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" TEXT ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_json() {
        let out = render(&order(), OutputFormat::Json, false).unwrap();
        assert_eq!(out, r#"{"subtotal":1000.0,"discount":100.0,"tax":90.0,"total":990.0}"#);
    }

    #[test]
    fn test_render_text_receipt() {
        let out = render(&order(), OutputFormat::Text, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Subtotal"));
        assert!(lines[0].ends_with("$1000.00"));
        assert!(lines[1].ends_with("-$100.00"));
        assert!(lines[3].ends_with("$990.00"));
    }

    #[test]
    fn test_render_display_name_text() {
        let response = CheckoutResponse::DisplayName {
            display_name: "John Doe".to_string(),
        };
        assert_eq!(render(&response, OutputFormat::Text, false).unwrap(), "John Doe");
    }

    #[test]
    fn test_render_error() {
        let err = ValidationError::InvalidShippingMethod;
        assert_eq!(
            render_error(&err, OutputFormat::Json, false).unwrap(),
            r#"{"error":"invalid_shipping_method","message":"Invalid shipping method"}"#
        );
        assert_eq!(
            render_error(&err, OutputFormat::Text, false).unwrap(),
            "error: Invalid shipping method"
        );
    }
}
