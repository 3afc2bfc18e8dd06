//! # Invoice Drafts
//!
//! A draft is the JSON form of an invoice request: parties, items and
//! optional overrides. It is turned into an [`InvoiceBuilder`] on top of the
//! configured defaults.
//!
//! ```json
//! {
//!   "name": "Invoice",
//!   "sequence": 667,
//!   "buyer": { "name": "Ashley Medina", "custom_fields": { "email": "a@example.com" } },
//!   "items": [
//!     { "title": "Service", "price_per_unit": "47.79", "quantity": 2,
//!       "discount": { "amount": "10" } }
//!   ],
//!   "tax": { "amount": "21", "kind": "percent" },
//!   "shipping": "4.99"
//! }
//! ```

use chrono::NaiveDate;
use invoicer_core::{Adjustment, Contact, InvoiceBuilder, LineItem};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::config::InvoiceConfig;
use crate::error::RenderResult;

/// Invoice name used when a draft has none.
pub const DEFAULT_INVOICE_NAME: &str = "Invoice";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvoiceDraft {
    pub name: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub logo: Option<String>,
    pub payment: Option<String>,
    pub bank: Option<String>,
    pub swift: Option<String>,
    pub course: Option<String>,
    pub course_date: Option<String>,
    /// Filename without extension.
    pub filename: Option<String>,

    pub series: Option<String>,
    pub sequence: Option<u64>,
    pub date: Option<NaiveDate>,
    pub pay_until_days: Option<u32>,

    pub seller: Option<Contact>,
    pub buyer: Option<Contact>,
    pub items: Vec<LineItem>,

    pub total_amount: Option<Decimal>,
    pub discount: Option<Adjustment>,
    pub tax: Option<Adjustment>,
    pub taxable_amount: Option<Decimal>,
    pub shipping: Option<Decimal>,

    pub custom_data: Option<serde_json::Value>,
}

impl InvoiceDraft {
    pub fn from_json(contents: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Builds on top of `config`; draft values win over configured ones.
    pub fn into_builder(self, config: &InvoiceConfig) -> RenderResult<InvoiceBuilder> {
        let name = self.name.unwrap_or_else(|| DEFAULT_INVOICE_NAME.to_string());
        let mut builder = config.apply(InvoiceBuilder::new(name));

        macro_rules! set_opt {
            ($builder:ident; $($value:expr => $setter:ident),* $(,)?) => {
                $(
                    if let Some(value) = $value {
                        $builder = $builder.$setter(value);
                    }
                )*
            };
        }

        set_opt! {
            builder;
            self.status => status,
            self.notes => notes,
            self.logo => logo,
            self.payment => payment,
            self.bank => bank,
            self.swift => swift,
            self.course => course,
            self.course_date => course_date,
            self.filename => filename,
            self.series => series,
            self.sequence => sequence,
            self.date => date,
            self.pay_until_days => pay_until_days,
            self.seller => seller,
            self.buyer => buyer,
            self.total_amount => total_amount,
            self.taxable_amount => taxable_amount,
            self.shipping => shipping,
            self.custom_data => custom_data,
        }

        if let Some(discount) = self.discount {
            builder = builder.total_discount(discount.amount, discount.is_percent())?;
        }
        if let Some(tax) = self.tax {
            builder = builder.total_taxes(tax.amount, tax.is_percent())?;
        }

        Ok(builder.add_items(self.items))
    }
}
