//! # Money Module
//!
//! Cent rounding for calculator results and the `Money` type used to print
//! them on receipts.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Calculators work on real numbers (price × quantity, percentages).     │
//! │                                                                         │
//! │  order_total:  raw f64 ──► round_to_cents ─────────────────────► result │
//! │                            (nearest cent, halves away from zero)       │
//! │                                                                         │
//! │  cart:         raw f64 ──────────────────────────────────────► result  │
//! │                (returned unrounded)                                    │
//! │                                                                         │
//! │  CLI text output formats either through Money's Display: "$10.99"     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let tax = Money::from_amount(24.999_975);
//! assert_eq!(tax.cents(), 2500);
//! assert_eq!(tax.amount(), 25.0);
//! assert_eq!(tax.to_string(), "$25.00");
//! ```

use std::fmt;
use std::ops::Neg;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a discount larger than the subtotal yields a negative
///   taxable amount, which must survive rounding unchanged in sign
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a real amount to the nearest cent.
    ///
    /// Exact halves round away from zero, so `0.125` becomes 13 cents and
    /// `-0.125` becomes -13 cents. Non-finite input settles to zero and
    /// amounts beyond the `i64` cent range saturate, so this is for display
    /// only; calculators round with [`round_to_cents`].
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(333.3333).cents(), 33333);
    /// assert_eq!(Money::from_amount(-30.0).cents(), -3000);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a real amount with two fraction digits.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Magnitude from which every `f64` is a whole number.
const WHOLE_ABOVE: f64 = 4_503_599_627_370_496.0;

/// Rounds a real amount to two decimal places, halves away from zero.
///
/// Works in `f64` throughout: amounts of any magnitude keep their value,
/// and NaN or infinities pass through unchanged.
pub fn round_to_cents(amount: f64) -> f64 {
    let scaled = amount * 100.0;
    if !scaled.is_finite() || amount.abs() >= WHOLE_ABOVE {
        return amount;
    }
    scaled.round() / 100.0
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$10.99` / `-$5.50`.
///
/// ## Note
/// No currency or locale handling: the symbol is fixed.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_amount_rounds_to_nearest_cent() {
        assert_eq!(Money::from_amount(333.3333).cents(), 33333);
        assert_eq!(Money::from_amount(24.999_975).cents(), 2500);
        assert_eq!(Money::from_amount(0.125).cents(), 13);
        assert_eq!(Money::from_amount(1000.0).cents(), 100_000);
    }

    #[test]
    fn test_from_amount_negative_rounds_away_from_zero() {
        assert_eq!(Money::from_amount(-0.125).cents(), -13);
        assert_eq!(Money::from_amount(-30.0).cents(), -3000);
    }

    #[test]
    fn test_from_amount_non_finite_is_zero() {
        assert!(Money::from_amount(f64::NAN).is_zero());
        assert!(Money::from_amount(f64::INFINITY).is_zero());
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(333.3333), 333.33);
        assert_eq!(round_to_cents(90.0), 90.0);
        assert_eq!(round_to_cents(12.345_6), 12.35);
        assert_eq!(round_to_cents(-30.004), -30.0);
    }

    #[test]
    fn test_round_to_cents_keeps_large_amounts() {
        assert_eq!(round_to_cents(1e20), 1e20);
        assert_eq!(round_to_cents(9.5e16), 9.5e16);
        assert_eq!(round_to_cents(1e300), 1e300);
    }

    #[test]
    fn test_round_to_cents_passes_non_finite_through() {
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_to_cents(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(round_to_cents(f64::NAN).is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_negate() {
        assert_eq!((-Money::from_cents(1000)).cents(), -1000);
        assert_eq!(format!("{}", -Money::from_amount(100.0)), "-$100.00");
    }
}
