//! # Pricing Module
//!
//! The numeric kernel of the invoice pipeline: quantity, discount and tax
//! application with currency rounding. Every function here is pure.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Integer cents fix that, but only for one fixed scale.                 │
//! │  Invoices carry `currency_decimals` per document (0 for JPY, 3 for     │
//! │  KWD), so amounts are `rust_decimal::Decimal` rounded per stage.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Mode
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ROUND HALF AWAY FROM ZERO                                          │
//! │                                                                     │
//! │    0.125 → 0.13     -0.125 → -0.13     0.124 → 0.12                │
//! │                                                                     │
//! │  Applied exactly once at the end of each stage:                     │
//! │    item quantity → item discount → item tax                        │
//! │    invoice discount → invoice tax → shipping                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! Every multiplication, addition and subtraction is checked. An amount
//! outside the `Decimal` range becomes [`CoreError::AmountOverflow`]
//! naming the stage, never a panic.
//!
//! ## Usage
//! ```rust
//! use invoicer_core::pricing::{apply_discount, apply_tax};
//! use rust_decimal::Decimal;
//!
//! let hundred = Decimal::new(100, 0);
//! let ten = Decimal::new(10, 0);
//!
//! assert_eq!(apply_discount(hundred, ten, 2, true).unwrap(), Decimal::new(9000, 2));
//! assert_eq!(apply_tax(hundred, ten, 2, false).unwrap(), Decimal::new(11000, 2));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CoreError, CoreResult};

/// Rounding used for every monetary result.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Rounds `amount` to `decimals` places using [`ROUNDING`].
#[inline]
pub fn round(amount: Decimal, decimals: u32) -> Decimal {
    amount.round_dp_with_strategy(decimals, ROUNDING)
}

/// Multiplies a unit price by a quantity.
///
/// ## Example
/// ```rust
/// use invoicer_core::pricing::apply_quantity;
/// use rust_decimal::Decimal;
///
/// let line = apply_quantity(Decimal::new(299, 2), Decimal::new(3, 0), 2).unwrap();
/// assert_eq!(line, Decimal::new(897, 2)); // 8.97
/// ```
pub fn apply_quantity(price: Decimal, quantity: Decimal, decimals: u32) -> CoreResult<Decimal> {
    let line = price
        .checked_mul(quantity)
        .ok_or(CoreError::AmountOverflow { stage: "quantity" })?;
    Ok(round(line, decimals))
}

/// Subtracts a discount from `base`.
///
/// - `by_percent = true`:  `base × (1 − value / 100)`
/// - `by_percent = false`: `base − value`
///
/// The result is rounded to `decimals` places.
pub fn apply_discount(
    base: Decimal,
    value: Decimal,
    decimals: u32,
    by_percent: bool,
) -> CoreResult<Decimal> {
    let discounted = if by_percent {
        Decimal::ONE
            .checked_sub(percent_of_one(value))
            .and_then(|factor| base.checked_mul(factor))
    } else {
        base.checked_sub(value)
    };
    let discounted = discounted.ok_or(CoreError::AmountOverflow { stage: "discount" })?;
    Ok(round(discounted, decimals))
}

/// Adds a tax (or any tax-like addend such as shipping) to `base`.
///
/// - `by_percent = true`:  `base × (1 + value / 100)`
/// - `by_percent = false`: `base + value`
///
/// The result is rounded to `decimals` places.
pub fn apply_tax(
    base: Decimal,
    value: Decimal,
    decimals: u32,
    by_percent: bool,
) -> CoreResult<Decimal> {
    let taxed = if by_percent {
        Decimal::ONE
            .checked_add(percent_of_one(value))
            .and_then(|factor| base.checked_mul(factor))
    } else {
        base.checked_add(value)
    };
    let taxed = taxed.ok_or(CoreError::AmountOverflow { stage: "tax" })?;
    Ok(round(taxed, decimals))
}

/// `a + b`, or [`CoreError::AmountOverflow`] naming `stage`.
pub(crate) fn checked_sum(a: Decimal, b: Decimal, stage: &'static str) -> CoreResult<Decimal> {
    a.checked_add(b).ok_or(CoreError::AmountOverflow { stage })
}

/// `a − b`, or [`CoreError::AmountOverflow`] naming `stage`.
pub(crate) fn checked_difference(
    a: Decimal,
    b: Decimal,
    stage: &'static str,
) -> CoreResult<Decimal> {
    a.checked_sub(b).ok_or(CoreError::AmountOverflow { stage })
}

/// `value / 100`. Dividing by a constant above one cannot overflow.
#[inline]
fn percent_of_one(value: Decimal) -> Decimal {
    value / Decimal::ONE_HUNDRED
}

// =============================================================================
// Unit Tests
// =============================================================================
