//! # invoicer-core: Pure Invoice Calculation
//!
//! This crate is the **heart** of Invoicer. It accumulates line items,
//! parties and monetary adjustments, then resolves the final totals of an
//! invoice document. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Invoicer Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                invoicer-render (CLI / embedding app)            │   │
//! │  │    config ──► draft ──► InvoiceBuilder ──► render(JsonRenderer) │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ invoicer-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  invoice  │  │   item    │  │  pricing  │  │ validation│  │   │
//! │  │   │  Builder  │  │ LineItem  │  │ discount  │  │   gates   │  │   │
//! │  │   │  Totals   │  │ ItemTotals│  │    tax    │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENVIRONMENT • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`invoice`] - `InvoiceBuilder`, `Invoice` and the totals pipeline
//! - [`item`] - `LineItem` with its own sub-total, discount and tax
//! - [`pricing`] - Discount/tax kernel with currency rounding
//! - [`types`] - `Adjustment` and adjustment labels
//! - [`party`] - Buyer/seller capability and the `Contact` implementation
//! - [`currency`] - Currency settings and amount formatting
//! - [`serial`] - Serial number settings and rendering
//! - [`validation`] - Business rule validation and override gates
//! - [`snapshot`] - Read-only views handed to renderers
//! - [`render`] - Collaborator traits (renderer, logo source, speller)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use invoicer_core::{Contact, InvoiceBuilder, LineItem};
//! use rust_decimal::Decimal;
//!
//! let mut invoice = InvoiceBuilder::new("Invoice")
//!     .buyer(Contact::new("ACME Ltd."))
//!     .add_item(LineItem::new("Consulting").price_per_unit(Decimal::new(50, 0)))
//!     .add_item(LineItem::new("Support").price_per_unit(Decimal::new(30, 0)))
//!     .build();
//!
//! let totals = invoice.prepare().unwrap();
//! assert_eq!(totals.total_amount, Decimal::new(8000, 2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod invoice;
pub mod item;
pub mod party;
pub mod pricing;
pub mod render;
pub mod serial;
pub mod snapshot;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use invoicer_core::Invoice` instead of
// `use invoicer_core::invoice::Invoice`

pub use currency::Currency;
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceBuilder, InvoiceTotals};
pub use item::{ItemTotals, LineItem};
pub use party::{Contact, Party};
pub use render::{AmountInWords, LogoSource, Renderer};
pub use serial::SerialNumber;
pub use snapshot::{InvoiceSnapshot, ItemSnapshot, PartySnapshot};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Columns every rendered item table has before optional columns are added.
///
/// One extra column is added for each of units, item discount and item tax
/// when at least one line item carries that attribute.
pub const BASE_TABLE_COLUMNS: usize = 4;

/// Extension appended to every invoice filename.
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "default";

/// Default strftime pattern for rendered dates.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Days between the invoice date and the payment deadline.
pub const DEFAULT_PAY_UNTIL_DAYS: u32 = 7;

/// Largest number of currency decimals accepted.
///
/// `rust_decimal` supports a scale of 28, but no currency comes close and
/// large scales overflow quickly when multiplied by quantities.
pub const MAX_CURRENCY_DECIMALS: u32 = 10;
