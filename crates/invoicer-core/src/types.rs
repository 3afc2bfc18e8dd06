//! # Domain Types
//!
//! Adjustment types shared by invoices and line items.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐  ┌──────────────────┐      │
//! │  │   Adjustment    │   │ AdjustmentTarget │  │ AdjustmentOwner  │      │
//! │  │  ─────────────  │   │  ──────────────  │  │  ──────────────  │      │
//! │  │  amount         │   │  Tax             │  │  Invoice         │      │
//! │  │  kind           │   │  Discount        │  │  Item            │      │
//! │  └─────────────────┘   └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │ AdjustmentKind  │   Fixed:   10   → subtract/add 10.00              │
//! │  │  Fixed          │   Percent: 10   → subtract/add 10% of the base    │
//! │  │  Percent        │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Presence, Not Zero
//! An override is `Option<Adjustment>`. `None` means "not set", while
//! `Some(Adjustment::fixed(0))` is an explicit zero override. The two are
//! never conflated.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pricing;

// =============================================================================
// Adjustment
// =============================================================================

/// How an adjustment amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// The amount is an absolute value in the invoice currency.
    Fixed,
    /// The amount is a percentage of the base (10 = 10%).
    Percent,
}

impl Default for AdjustmentKind {
    fn default() -> Self {
        AdjustmentKind::Fixed
    }
}

/// A tax or discount, either as a fixed amount or as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Adjustment {
    #[ts(as = "String")]
    pub amount: Decimal,
    #[serde(default)]
    pub kind: AdjustmentKind,
}

impl Adjustment {
    /// Creates a fixed-amount adjustment.
    #[inline]
    pub const fn fixed(amount: Decimal) -> Self {
        Adjustment {
            amount,
            kind: AdjustmentKind::Fixed,
        }
    }

    /// Creates a percentage adjustment (10 = 10%).
    #[inline]
    pub const fn percent(amount: Decimal) -> Self {
        Adjustment {
            amount,
            kind: AdjustmentKind::Percent,
        }
    }

    /// Creates an adjustment from the `(amount, by_percent)` pair used by
    /// the builder setters.
    #[inline]
    pub const fn new(amount: Decimal, by_percent: bool) -> Self {
        if by_percent {
            Adjustment::percent(amount)
        } else {
            Adjustment::fixed(amount)
        }
    }

    #[inline]
    pub const fn is_percent(&self) -> bool {
        matches!(self.kind, AdjustmentKind::Percent)
    }

    /// Returns the percentage if this is a percentage adjustment.
    #[inline]
    pub fn rate(&self) -> Option<Decimal> {
        self.is_percent().then_some(self.amount)
    }

    /// Subtracts this adjustment from `base`, rounded to `decimals`.
    pub fn apply_discount(&self, base: Decimal, decimals: u32) -> crate::CoreResult<Decimal> {
        pricing::apply_discount(base, self.amount, decimals, self.is_percent())
    }

    /// Adds this adjustment to `base`, rounded to `decimals`.
    pub fn apply_tax(&self, base: Decimal, decimals: u32) -> crate::CoreResult<Decimal> {
        pricing::apply_tax(base, self.amount, decimals, self.is_percent())
    }
}

// =============================================================================
// Adjustment Labels
// =============================================================================

/// Which adjustment a rule or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentTarget {
    Tax,
    Discount,
}

impl AdjustmentTarget {
    /// Plural form used in messages ("taxes", "discounts").
    pub fn plural(&self) -> &'static str {
        match self {
            AdjustmentTarget::Tax => "taxes",
            AdjustmentTarget::Discount => "discounts",
        }
    }
}

impl fmt::Display for AdjustmentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjustmentTarget::Tax => write!(f, "tax"),
            AdjustmentTarget::Discount => write!(f, "discount"),
        }
    }
}

/// Who carries an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentOwner {
    Invoice,
    Item,
}

impl fmt::Display for AdjustmentOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjustmentOwner::Invoice => write!(f, "Invoice"),
            AdjustmentOwner::Item => write!(f, "InvoiceItem"),
        }
    }
}

/// Stores `adjustment` into an empty override slot.
///
/// Fails with `DuplicateOverride` when the slot is already occupied, no
/// matter which setter (amount or percentage) filled it.
pub(crate) fn set_once(
    slot: &mut Option<Adjustment>,
    adjustment: Adjustment,
    owner: AdjustmentOwner,
    target: AdjustmentTarget,
) -> crate::CoreResult<()> {
    if slot.is_some() {
        return Err(crate::CoreError::DuplicateOverride {
            owner,
            adjustment: target,
        });
    }
    *slot = Some(adjustment);
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_adjustment_constructors() {
        assert_eq!(Adjustment::new(dec!(10), true), Adjustment::percent(dec!(10)));
        assert_eq!(Adjustment::new(dec!(10), false), Adjustment::fixed(dec!(10)));
        assert_eq!(Adjustment::percent(dec!(7.5)).rate(), Some(dec!(7.5)));
        assert_eq!(Adjustment::fixed(dec!(7.5)).rate(), None);
    }

    #[test]
    fn test_adjustment_kind_default() {
        assert_eq!(AdjustmentKind::default(), AdjustmentKind::Fixed);
    }

    #[test]
    fn test_adjustment_deserializes_without_kind() {
        let adj: Adjustment = serde_json::from_str(r#"{"amount":"12.50"}"#).unwrap();
        assert_eq!(adj, Adjustment::fixed(dec!(12.50)));

        let adj: Adjustment =
            serde_json::from_str(r#"{"amount":"5","kind":"percent"}"#).unwrap();
        assert!(adj.is_percent());
    }

    #[test]
    fn test_set_once_rejects_second_override() {
        let mut slot = None;
        set_once(
            &mut slot,
            Adjustment::fixed(dec!(5)),
            AdjustmentOwner::Invoice,
            AdjustmentTarget::Tax,
        )
        .unwrap();

        let err = set_once(
            &mut slot,
            Adjustment::percent(dec!(10)),
            AdjustmentOwner::Invoice,
            AdjustmentTarget::Tax,
        )
        .unwrap_err();
        assert!(matches!(err, crate::CoreError::DuplicateOverride { .. }));
        assert_eq!(slot, Some(Adjustment::fixed(dec!(5))));
    }

    #[test]
    fn test_zero_override_is_present() {
        let mut slot = None;
        set_once(
            &mut slot,
            Adjustment::fixed(Decimal::ZERO),
            AdjustmentOwner::Item,
            AdjustmentTarget::Discount,
        )
        .unwrap();
        assert!(slot.is_some());
    }

    #[test]
    fn test_adjustment_applies_by_kind() {
        let ten_percent = Adjustment::percent(dec!(10));
        let ten_fixed = Adjustment::fixed(dec!(10));

        assert_eq!(ten_percent.apply_discount(dec!(50), 2).unwrap(), dec!(45.00));
        assert_eq!(ten_fixed.apply_tax(dec!(50), 2).unwrap(), dec!(60.00));
        assert!(ten_fixed.apply_tax(Decimal::MAX, 2).is_err());
    }
}
