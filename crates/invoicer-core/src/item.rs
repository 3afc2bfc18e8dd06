//! # Line Items
//!
//! One billable row of an invoice. An item computes its own sub-total,
//! discount and tax; the owning invoice passes the currency precision so
//! rounding is controlled in one place.
//!
//! ## Item Pipeline
//! ```text
//! price_per_unit × quantity ──► − discount ──► + tax ──► sub_total_price
//!        (round)                  (round)       (round)
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::pricing;
use crate::types::{set_once, Adjustment, AdjustmentOwner, AdjustmentTarget};
use crate::validation;

/// Amounts resolved for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemTotals {
    /// Final row amount after item discount and item tax.
    pub sub_total_price: Decimal,
    /// Amount taken off by the item discount, if the item has one.
    pub discount: Option<Decimal>,
    /// Amount added by the item tax, if the item has one.
    pub tax: Option<Decimal>,
}

/// A single billable row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    units: Option<String>,
    #[serde(default = "default_quantity")]
    quantity: Decimal,
    #[serde(default)]
    price_per_unit: Decimal,
    #[serde(default)]
    discount: Option<Adjustment>,
    #[serde(default)]
    tax: Option<Adjustment>,
    /// Caller-supplied row total; skips the item pipeline.
    #[serde(default, rename = "sub_total_price")]
    sub_total_override: Option<Decimal>,
    #[serde(skip)]
    computed: Option<ItemTotals>,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

impl LineItem {
    /// Creates an item with quantity 1 and a zero price.
    pub fn new(title: impl Into<String>) -> Self {
        LineItem {
            title: title.into(),
            description: None,
            units: None,
            quantity: default_quantity(),
            price_per_unit: Decimal::ZERO,
            discount: None,
            tax: None,
            sub_total_override: None,
            computed: None,
        }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Unit label ("hours", "pcs"). Adds a units column to the table.
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn price_per_unit(mut self, price: Decimal) -> Self {
        self.price_per_unit = price;
        self
    }

    /// Sets the row total directly; the item pipeline is skipped.
    pub fn sub_total_price(mut self, amount: Decimal) -> Self {
        self.sub_total_override = Some(amount);
        self
    }

    /// Sets the item discount. Fails if a discount was already set.
    pub fn discount(mut self, amount: Decimal, by_percent: bool) -> CoreResult<Self> {
        set_once(
            &mut self.discount,
            Adjustment::new(amount, by_percent),
            AdjustmentOwner::Item,
            AdjustmentTarget::Discount,
        )?;
        Ok(self)
    }

    pub fn discount_by_percent(self, percent: Decimal) -> CoreResult<Self> {
        self.discount(percent, true)
    }

    /// Sets the item tax. Fails if a tax was already set.
    pub fn tax(mut self, amount: Decimal, by_percent: bool) -> CoreResult<Self> {
        set_once(
            &mut self.tax,
            Adjustment::new(amount, by_percent),
            AdjustmentOwner::Item,
            AdjustmentTarget::Tax,
        )?;
        Ok(self)
    }

    pub fn tax_by_percent(self, percent: Decimal) -> CoreResult<Self> {
        self.tax(percent, true)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get_units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    pub fn get_quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn get_price_per_unit(&self) -> Decimal {
        self.price_per_unit
    }

    pub fn discount_adjustment(&self) -> Option<&Adjustment> {
        self.discount.as_ref()
    }

    pub fn tax_adjustment(&self) -> Option<&Adjustment> {
        self.tax.as_ref()
    }

    /// Totals stored by the last [`calculate`](Self::calculate).
    pub fn totals(&self) -> Option<&ItemTotals> {
        self.computed.as_ref()
    }

    pub fn has_units(&self) -> bool {
        self.units.is_some()
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }

    pub fn has_tax(&self) -> bool {
        self.tax.is_some()
    }

    // =========================================================================
    // Calculation
    // =========================================================================

    pub fn validate(&self) -> CoreResult<()> {
        validation::validate_item_title(&self.title)?;
        Ok(())
    }

    /// Computes this item's totals without storing them.
    ///
    /// With an explicit sub-total the pipeline is skipped and the configured
    /// discount/tax amounts are reported as given.
    ///
    /// # Errors
    /// [`CoreError::AmountOverflow`](crate::CoreError::AmountOverflow) when a
    /// stage leaves the `Decimal` range.
    pub fn compute(&self, decimals: u32) -> CoreResult<ItemTotals> {
        if let Some(sub_total_price) = self.sub_total_override {
            return Ok(ItemTotals {
                sub_total_price,
                discount: self.discount.map(|d| d.amount),
                tax: self.tax.map(|t| t.amount),
            });
        }

        let base = pricing::apply_quantity(self.price_per_unit, self.quantity, decimals)?;

        let (after_discount, discount) = match &self.discount {
            Some(adjustment) => {
                let discounted = adjustment.apply_discount(base, decimals)?;
                let taken = pricing::checked_difference(base, discounted, "discount")?;
                (discounted, Some(taken))
            }
            None => (base, None),
        };

        let (sub_total_price, tax) = match &self.tax {
            Some(adjustment) => {
                let taxed = adjustment.apply_tax(after_discount, decimals)?;
                let added = pricing::checked_difference(taxed, after_discount, "tax")?;
                (taxed, Some(added))
            }
            None => (after_discount, None),
        };

        Ok(ItemTotals {
            sub_total_price,
            discount,
            tax,
        })
    }

    /// Computes and stores this item's totals. Nothing is stored on error.
    pub fn calculate(&mut self, decimals: u32) -> CoreResult<&ItemTotals> {
        let totals = self.compute(decimals)?;
        Ok(self.computed.insert(totals))
    }

    pub(crate) fn store(&mut self, totals: ItemTotals) {
        self.computed = Some(totals);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
