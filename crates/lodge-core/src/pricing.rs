//! # Stay Pricing
//!
//! The long-stay discount policy and the price breakdown of a stay.
//!
//! ## Policy
//! ```text
//! subtotal = nightly_rate × days
//!
//! days <  10  ──► total = subtotal
//! days >= 10  ──► total = subtotal × 90%      (threshold is inclusive)
//! ```
//!
//! The total is rounded to the cent once, half away from zero; the discount
//! is whatever the rounding left between subtotal and total.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::DiscountRate;
use crate::{LONG_STAY_DISCOUNT_BPS, LONG_STAY_THRESHOLD_DAYS};

/// Price breakdown of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub days: u32,
    pub nightly_rate: Money,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}

impl StayQuote {
    /// Whether the long-stay discount was applied.
    #[inline]
    pub fn discount_applied(&self) -> bool {
        self.days >= LONG_STAY_THRESHOLD_DAYS
    }
}

/// Discount rate that applies to a stay of `days`.
pub fn long_stay_discount(days: u32) -> DiscountRate {
    if days >= LONG_STAY_THRESHOLD_DAYS {
        DiscountRate::from_bps(LONG_STAY_DISCOUNT_BPS)
    } else {
        DiscountRate::zero()
    }
}

/// Prices a stay of `days` nights at `nightly_rate`.
///
/// ## Example
/// ```rust
/// use lodge_core::money::Money;
/// use lodge_core::pricing::quote_stay;
///
/// let quote = quote_stay(12, Money::from_cents(10_000)).unwrap();
/// assert_eq!(quote.subtotal.cents(), 120_000);
/// assert_eq!(quote.discount.cents(), 12_000);
/// assert_eq!(quote.total.cents(), 108_000);
/// assert!(quote.discount_applied());
/// ```
pub fn quote_stay(days: u32, nightly_rate: Money) -> CoreResult<StayQuote> {
    let subtotal = nightly_rate
        .checked_multiply(days)
        .ok_or(CoreError::AmountOverflow("stay subtotal"))?;
    let total = subtotal.apply_discount(long_stay_discount(days));

    Ok(StayQuote {
        days,
        nightly_rate,
        subtotal,
        discount: subtotal - total,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rate() -> Money {
        Money::from_cents(10_000)
    }

    #[test]
    fn test_nine_days_has_no_discount() {
        let quote = quote_stay(9, rate()).unwrap();
        assert_eq!(quote.total.cents(), 90_000);
        assert!(quote.discount.is_zero());
        assert!(!quote.discount_applied());
    }

    #[test]
    fn test_ten_days_gets_discount() {
        let quote = quote_stay(10, rate()).unwrap();
        assert_eq!(quote.subtotal.cents(), 100_000);
        assert_eq!(quote.total.cents(), 90_000);
        assert!(quote.discount_applied());
    }

    /// `days × rate × 0.9` in exact decimal arithmetic, formatted to two
    /// decimals with midpoints rounded up.
    fn expected_total(days: u32, rate_cents: i64) -> String {
        // thousandths of a cent: rate × days × 900 / 1000
        let mills = rate_cents * i64::from(days) * if days >= 10 { 900 } else { 1000 };
        let cents = mills / 1000 + if mills % 1000 >= 500 { 1 } else { 0 };
        format!("{}.{:02}", cents / 100, cents % 100)
    }

    #[test]
    fn test_discount_law_across_threshold() {
        for rate_cents in [1, 5, 55, 1005, 9990, 12_345] {
            for days in 1..=30u32 {
                let quote = quote_stay(days, Money::from_cents(rate_cents)).unwrap();
                assert_eq!(
                    quote.total.to_string(),
                    expected_total(days, rate_cents),
                    "days = {days}, rate = {rate_cents}"
                );
                assert_eq!(quote.subtotal - quote.discount, quote.total);
            }
        }
    }

    #[test]
    fn test_half_cent_total_rounds_up() {
        // 11 × 10.05 × 0.9 = 99.495
        let quote = quote_stay(11, Money::from_cents(1005)).unwrap();
        assert_eq!(quote.subtotal.cents(), 11_055);
        assert_eq!(quote.total.to_string(), "99.50");
        assert_eq!(quote.discount.cents(), 1_105);
    }

    #[test]
    fn test_free_suite_costs_nothing() {
        let quote = quote_stay(15, Money::zero()).unwrap();
        assert!(quote.total.is_zero());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let result = quote_stay(u32::MAX, Money::from_cents(i64::MAX / 1000));
        assert!(matches!(result, Err(CoreError::AmountOverflow(_))));
    }
}
