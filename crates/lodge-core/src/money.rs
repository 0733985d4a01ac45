//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A nightly rate of 99.90 for 12 nights must total exactly 1198.80,     │
//! │  and 10% off must be exactly 1078.92.                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    9990 cents × 12 = 119880 cents                                       │
//! │    119880 − 11988 = 107892 cents                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lodge_core::money::Money;
//!
//! // Create from cents (preferred)
//! let rate = Money::from_cents(9990); // 99.90
//!
//! // Or parse what the operator typed
//! let typed: Money = "99,90".parse().unwrap();
//! assert_eq!(typed, rate);
//!
//! let stay = rate.checked_multiply(12).unwrap();
//! assert_eq!(stay.cents(), 119_880);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Keeps subtraction of discounts simple
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency**: The console adds the configured symbol at display time
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Suite.nightly_rate ──► × days ──► StayQuote.subtotal                   │
/// │                                          │                              │
/// │                                          ▼                              │
/// │                             long-stay discount (10%)                    │
/// │                                          │                              │
/// │                                          ▼                              │
/// │                                  StayQuote.total ──► "R$ 1080.00"       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use lodge_core::money::Money;
    ///
    /// let rate = Money::from_cents(50_000); // Represents 500.00
    /// assert_eq!(rate.cents(), 50_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a count (nights, units), or `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use lodge_core::money::Money;
    ///
    /// let rate = Money::from_cents(10_000);
    /// assert_eq!(rate.checked_multiply(12), Some(Money::from_cents(120_000)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply(2), None);
    /// ```
    #[inline]
    pub fn checked_multiply(&self, count: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(count)).map(Money)
    }

    /// Applies a discount and rounds the discounted amount to the cent.
    ///
    /// The rounding happens once, on the result: half a cent rounds away
    /// from zero, so `10.05 × 11 × 90% = 99.495` becomes `99.50`.
    ///
    /// ## Implementation
    /// Integer math: `(amount * (10000 - bps) + 5000) / 10000`, widened to
    /// i128 so large amounts cannot overflow the intermediate product.
    ///
    /// ## Example
    /// ```rust
    /// use lodge_core::money::Money;
    /// use lodge_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(120_000); // 1200.00
    /// let discounted = subtotal.apply_discount(DiscountRate::from_bps(1000)); // 10% off
    /// assert_eq!(discounted.cents(), 108_000); // 1080.00
    ///
    /// let subtotal = Money::from_cents(11_055); // 110.55
    /// assert_eq!(subtotal.apply_discount(DiscountRate::from_bps(1000)).cents(), 9_950);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let keep = 10_000 - i128::from(rate.bps().min(10_000));
        let scaled = i128::from(self.0.unsigned_abs()) * keep;
        let cents = ((scaled + 5_000) / 10_000) as i64;
        Money::from_cents(if self.0 < 0 { -cents } else { cents })
    }

    /// The amount taken off by [`apply_discount`](Self::apply_discount).
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        *self - self.apply_discount(rate)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the plain amount with two decimals ("1080.00", "-5.50").
///
/// The currency prefix belongs to the console configuration, not to the core.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Parses an amount typed by the operator.
///
/// ## Accepted Forms
/// ```text
/// "100"      → 10000 cents
/// "100.5"    → 10050 cents
/// "100,50"   → 10050 cents   (comma decimal separator)
/// "-5.50"    →  -550 cents   (sign is kept; validation rejects it later)
/// "1.999"    → InvalidFormat (at most two decimals)
/// "abc"      → InvalidFormat
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (whole, fraction) = unsigned.split_once(['.', ',']).unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("must contain digits"));
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a number like 150 or 150.00"));
        }
        if fraction.len() > 2 {
            return Err(invalid("must have at most two decimal places"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("is too large"))?
        };
        let minor: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("is not a number"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("is not a number"))?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display_has_no_currency_symbol() {
        assert_eq!(Money::from_cents(108_000).to_string(), "1080.00");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("100".parse::<Money>().unwrap().cents(), 10_000);
        assert_eq!("100.5".parse::<Money>().unwrap().cents(), 10_050);
        assert_eq!("100,50".parse::<Money>().unwrap().cents(), 10_050);
        assert_eq!(" 0.07 ".parse::<Money>().unwrap().cents(), 7);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("12.".parse::<Money>().unwrap().cents(), 1_200);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rejected_forms() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["abc", "1.999", "1.2.3", "12a", ".", "-", "1 000"] {
            assert!(
                matches!(bad.parse::<Money>(), Err(ValidationError::InvalidFormat { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_checked_multiply() {
        let rate = Money::from_cents(9990);
        assert_eq!(rate.checked_multiply(12).unwrap().cents(), 119_880);
        assert_eq!(rate.checked_multiply(0).unwrap(), Money::zero());
        assert!(Money::from_cents(i64::MAX / 2).checked_multiply(3).is_none());
    }

    #[test]
    fn test_discount_is_exact_for_whole_cents() {
        let subtotal = Money::from_cents(119_880);
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(subtotal.discount_amount(rate).cents(), 11_988);
        assert_eq!(subtotal.apply_discount(rate).cents(), 107_892);
    }

    #[test]
    fn test_discounted_amount_rounds_half_away_from_zero() {
        // 0.55 × 90% = 0.495 → 0.50, so 0.05 off
        let rate = DiscountRate::from_bps(1000);
        let subtotal = Money::from_cents(55);
        assert_eq!(subtotal.apply_discount(rate).cents(), 50);
        assert_eq!(subtotal.discount_amount(rate).cents(), 5);

        // 110.55 × 90% = 99.495 → 99.50
        assert_eq!(Money::from_cents(11_055).apply_discount(rate).cents(), 9_950);
        assert_eq!(Money::from_cents(-11_055).apply_discount(rate).cents(), -9_950);
    }

    #[test]
    fn test_zero_discount_keeps_amount() {
        let subtotal = Money::from_cents(12_345);
        assert_eq!(subtotal.apply_discount(DiscountRate::zero()), subtotal);
        assert!(subtotal.discount_amount(DiscountRate::zero()).is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a - b).cents(), 500);
        assert!((b - a).is_negative());
    }
}
