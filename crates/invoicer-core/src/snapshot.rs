//! # Snapshots
//!
//! Read-only views handed to a [`Renderer`](crate::Renderer). Every
//! monetary field is already resolved and rounded; templates never compute.
//!
//! Decimals serialize as strings so no precision is lost in JSON.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use ts_rs::TS;

use crate::party::Party;
use crate::types::Adjustment;

/// A buyer or seller as shown on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PartySnapshot {
    pub name: String,
    pub address: Option<String>,
    pub code: Option<String>,
    pub vat: Option<String>,
    pub phone: Option<String>,
    pub custom_fields: BTreeMap<String, String>,
}

impl PartySnapshot {
    pub fn from_party(party: &dyn Party) -> Self {
        PartySnapshot {
            name: party.name().to_string(),
            address: party.address().map(str::to_string),
            code: party.code().map(str::to_string),
            vat: party.vat().map(str::to_string),
            phone: party.phone().map(str::to_string),
            custom_fields: party.custom_fields(),
        }
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ItemSnapshot {
    pub title: String,
    pub description: Option<String>,
    pub units: Option<String>,
    #[ts(as = "String")]
    pub quantity: Decimal,
    #[ts(as = "String")]
    pub price_per_unit: Decimal,
    /// Configured item discount (amount or percentage).
    pub discount_adjustment: Option<Adjustment>,
    /// Configured item tax (amount or percentage).
    pub tax_adjustment: Option<Adjustment>,
    #[ts(as = "Option<String>")]
    pub discount: Option<Decimal>,
    #[ts(as = "Option<String>")]
    pub tax: Option<Decimal>,
    #[ts(as = "String")]
    pub sub_total_price: Decimal,
}

/// The whole invoice as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct InvoiceSnapshot {
    pub name: String,
    pub serial_number: String,
    pub status: Option<String>,
    pub date: String,
    pub pay_until_date: String,
    pub template: String,
    pub filename: String,
    pub notes: Option<String>,
    pub logo: Option<String>,
    pub payment: Option<String>,
    pub bank: Option<String>,
    pub swift: Option<String>,
    pub course: Option<String>,
    pub course_date: Option<String>,

    pub currency_code: String,
    pub currency_symbol: String,
    pub currency_decimals: u32,

    pub seller: Option<PartySnapshot>,
    pub buyer: PartySnapshot,
    pub items: Vec<ItemSnapshot>,

    #[ts(as = "String")]
    pub total_amount: Decimal,
    #[ts(as = "Option<String>")]
    pub total_discount: Option<Decimal>,
    /// Invoice-level discount percentage, when given as a percentage.
    #[ts(as = "Option<String>")]
    pub discount_percentage: Option<Decimal>,
    #[ts(as = "Option<String>")]
    pub total_taxes: Option<Decimal>,
    /// Invoice-level tax rate, when given as a percentage.
    #[ts(as = "Option<String>")]
    pub tax_rate: Option<Decimal>,
    #[ts(as = "Option<String>")]
    pub taxable_amount: Option<Decimal>,
    #[ts(as = "Option<String>")]
    pub shipping_amount: Option<Decimal>,
    /// Display string of `total_amount` in the invoice currency.
    pub total_amount_formatted: String,

    pub has_item_units: bool,
    pub has_item_discount: bool,
    pub has_item_tax: bool,
    pub table_columns: usize,

    #[ts(type = "unknown")]
    pub custom_data: Option<serde_json::Value>,
}
