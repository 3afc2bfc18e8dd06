//! # Invoice
//!
//! [`InvoiceBuilder`] accumulates configuration through chained setters and
//! produces an [`Invoice`]. [`Invoice::prepare`] validates and resolves the
//! totals exactly once; [`Invoice::render`] then hands a read-only
//! [`InvoiceSnapshot`] to a renderer.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  prepare()                                                              │
//! │                                                                         │
//! │  1. validate        buyer set, item titles, date format, decimals      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  2. fold items      gate check → item.compute(decimals) → accumulate   │
//! │        │            (first conflicting item aborts, nothing mutated)   │
//! │        ▼                                                                │
//! │  3. table columns   base + units? + item discount? + item tax?         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  4. total_amount    override, else sum of item sub-totals              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  5. discount        invoice override applied, else item discounts      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  6. tax             invoice override applied, else item taxes          │
//! │                     (taken as given when taxable_amount is set)        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  7. shipping        added as a fixed amount                            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  commit             item totals + invoice totals stored               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each stage reads the `total_amount` left by the previous one, so the
//! order discount → tax → shipping is significant.
//!
//! ## Single Pass
//! Invoice-level overrides are applied on top of `total_amount`; running the
//! pipeline twice would apply them twice. A second `prepare()` therefore
//! fails with [`CoreError::AlreadyCalculated`].

use std::fmt::Write as _;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::currency::Currency;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::item::{ItemTotals, LineItem};
use crate::party::Party;
use crate::pricing;
use crate::render::{AmountInWords, LogoSource, Renderer};
use crate::serial::SerialNumber;
use crate::snapshot::{InvoiceSnapshot, ItemSnapshot, PartySnapshot};
use crate::types::{set_once, Adjustment, AdjustmentOwner, AdjustmentTarget};
use crate::validation;
use crate::{
    BASE_TABLE_COLUMNS, DEFAULT_DATE_FORMAT, DEFAULT_PAY_UNTIL_DAYS, DEFAULT_TEMPLATE,
    DOCUMENT_EXTENSION,
};

// =============================================================================
// Totals
// =============================================================================

/// Final amounts of a prepared invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceTotals {
    pub total_amount: Decimal,
    /// Invoice discount amount, or the sum of item discounts.
    pub total_discount: Option<Decimal>,
    /// Invoice tax amount, or the sum of item taxes.
    pub total_taxes: Option<Decimal>,
    /// Base the invoice-level tax was computed on, or the explicit one.
    pub taxable_amount: Option<Decimal>,
    pub shipping_amount: Option<Decimal>,
    pub has_item_units: bool,
    pub has_item_discount: bool,
    pub has_item_tax: bool,
    pub table_columns: usize,
}

/// Accumulator of the item fold.
#[derive(Debug, Default)]
struct ItemFold {
    total_amount: Decimal,
    total_discount: Option<Decimal>,
    total_taxes: Option<Decimal>,
    has_item_units: bool,
    has_item_discount: bool,
    has_item_tax: bool,
    computed: Vec<ItemTotals>,
}

// =============================================================================
// Invoice
// =============================================================================

/// An invoice document.
#[derive(Debug)]
pub struct Invoice {
    name: String,
    notes: Option<String>,
    logo: Option<String>,
    payment: Option<String>,
    bank: Option<String>,
    swift: Option<String>,
    course: Option<String>,
    course_date: Option<String>,
    status: Option<String>,
    template: String,
    filename: Option<String>,

    currency: Currency,
    serial: SerialNumber,
    date: NaiveDate,
    date_format: String,
    pay_until_days: u32,

    seller: Option<Box<dyn Party>>,
    buyer: Option<Box<dyn Party>>,
    items: Vec<LineItem>,
    custom_data: Option<serde_json::Value>,

    total_amount: Option<Decimal>,
    discount: Option<Adjustment>,
    tax: Option<Adjustment>,
    taxable_amount: Option<Decimal>,
    shipping_amount: Option<Decimal>,
    table_columns: usize,

    totals: Option<InvoiceTotals>,
}

impl Invoice {
    fn new(name: String) -> Self {
        Invoice {
            name,
            notes: None,
            logo: None,
            payment: None,
            bank: None,
            swift: None,
            course: None,
            course_date: None,
            status: None,
            template: DEFAULT_TEMPLATE.to_string(),
            filename: None,
            currency: Currency::default(),
            serial: SerialNumber::default(),
            date: Utc::now().date_naive(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            pay_until_days: DEFAULT_PAY_UNTIL_DAYS,
            seller: None,
            buyer: None,
            items: Vec::new(),
            custom_data: None,
            total_amount: None,
            discount: None,
            tax: None,
            taxable_amount: None,
            shipping_amount: None,
            table_columns: BASE_TABLE_COLUMNS,
            totals: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Path of the logo image, as configured.
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn seller(&self) -> Option<&dyn Party> {
        self.seller.as_deref()
    }

    pub fn buyer(&self) -> Option<&dyn Party> {
        self.buyer.as_deref()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Opaque payload passed through to templates untouched.
    pub fn custom_data(&self) -> Option<&serde_json::Value> {
        self.custom_data.as_ref()
    }

    pub fn serial_number(&self) -> String {
        self.serial.render()
    }

    /// Explicit filename, or `<snake_name>_<series>_<sequence>.pdf`.
    pub fn filename(&self) -> String {
        match &self.filename {
            Some(filename) => filename.clone(),
            None => self.default_filename(),
        }
    }

    fn default_filename(&self) -> String {
        let stem = if self.name.is_empty() {
            format!("{}_{}", self.serial.series, self.serial.sequence)
        } else {
            format!(
                "{}_{}_{}",
                snake_case(&self.name),
                self.serial.series,
                self.serial.sequence
            )
        };
        format!("{}.{}", stem, DOCUMENT_EXTENSION)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn pay_until_date(&self) -> NaiveDate {
        self.date
            .checked_add_days(Days::new(u64::from(self.pay_until_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn formatted_date(&self) -> CoreResult<String> {
        format_date(self.date, &self.date_format)
    }

    pub fn formatted_pay_until_date(&self) -> CoreResult<String> {
        format_date(self.pay_until_date(), &self.date_format)
    }

    /// Formats an amount in this invoice's currency.
    pub fn format_currency(&self, amount: Decimal) -> String {
        self.currency.format_amount(amount)
    }

    /// Invoice-level tax override, if any.
    pub fn tax_override(&self) -> Option<&Adjustment> {
        self.tax.as_ref()
    }

    /// Invoice-level discount override, if any.
    pub fn discount_override(&self) -> Option<&Adjustment> {
        self.discount.as_ref()
    }

    pub fn has_tax(&self) -> bool {
        self.tax.is_some()
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }

    pub fn has_shipping(&self) -> bool {
        self.shipping_amount.is_some()
    }

    /// Whether a total amount override was supplied.
    pub fn has_total_amount(&self) -> bool {
        self.total_amount.is_some()
    }

    pub fn has_item_or_invoice_tax(&self) -> bool {
        self.has_tax() || self.totals.map_or(false, |t| t.has_item_tax)
    }

    pub fn has_item_or_invoice_discount(&self) -> bool {
        self.has_discount() || self.totals.map_or(false, |t| t.has_item_discount)
    }

    /// Resolved totals, once [`prepare`](Self::prepare) has succeeded.
    pub fn totals(&self) -> Option<&InvoiceTotals> {
        self.totals.as_ref()
    }

    /// Resolved total, or the override while not yet prepared.
    pub fn total_amount(&self) -> Option<Decimal> {
        self.totals
            .map(|t| t.total_amount)
            .or(self.total_amount)
    }

    pub fn table_columns(&self) -> usize {
        self.totals.map_or(self.table_columns, |t| t.table_columns)
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Spells the resolved total out, e.g. "One hundred EUR and fifty ct.".
    pub fn total_amount_in_words(&self, speller: &dyn AmountInWords) -> CoreResult<String> {
        let totals = self.totals.as_ref().ok_or(CoreError::NotCalculated)?;
        Ok(self.amount_in_words(totals.total_amount, speller))
    }

    /// Spells `amount` out in this invoice's currency.
    pub fn amount_in_words(&self, amount: Decimal, speller: &dyn AmountInWords) -> String {
        let decimals = self.currency.decimals;
        let rounded = pricing::round(amount, decimals).abs();

        let integer_words = capitalize(&speller.spell_out(whole_units(rounded)));
        let code = self.currency.code.to_uppercase();

        if decimals == 0 {
            return format!("{} {}", integer_words, code);
        }

        let mut fraction = rounded.fract();
        for _ in 0..decimals {
            fraction *= Decimal::TEN;
        }

        format!(
            "{} {} and {} {}",
            integer_words,
            code,
            speller.spell_out(whole_units(fraction)),
            self.currency.fraction
        )
    }

    /// Reads the logo through `source` and returns it as a data URI:
    /// `data:image/<extension>;base64,<payload>`.
    pub fn logo_data_uri(&self, source: &dyn LogoSource) -> CoreResult<Option<String>> {
        let Some(path) = self.logo.as_deref() else {
            return Ok(None);
        };

        let bytes = source.read(path).map_err(|source| CoreError::Logo {
            path: path.to_string(),
            source,
        })?;
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        Ok(Some(format!(
            "data:image/{};base64,{}",
            extension,
            STANDARD.encode(bytes)
        )))
    }

    // =========================================================================
    // Preparation
    // =========================================================================

    /// Validates and calculates. Must run exactly once before output.
    ///
    /// On error nothing is stored: neither the item totals nor the invoice
    /// totals change.
    pub fn prepare(&mut self) -> CoreResult<&InvoiceTotals> {
        if self.totals.is_some() {
            return Err(CoreError::AlreadyCalculated);
        }

        self.validate()?;

        let fold = self.fold_items()?;
        let totals = self.resolve(&fold)?;

        for (item, computed) in self.items.iter_mut().zip(fold.computed) {
            item.store(computed);
        }

        info!(
            invoice = %self.name,
            items = self.items.len(),
            total_amount = %totals.total_amount,
            "Invoice prepared"
        );

        Ok(self.totals.insert(totals))
    }

    fn validate(&self) -> CoreResult<()> {
        if self.buyer.is_none() {
            return Err(CoreError::MissingBuyer);
        }

        for item in &self.items {
            item.validate()?;
        }

        validation::validate_date_format(&self.date_format)?;
        validation::validate_currency_decimals(self.currency.decimals)?;
        validation::validate_template(&self.template)?;

        Ok(())
    }

    /// Calculates every item and accumulates the invoice-wide sums.
    fn fold_items(&self) -> CoreResult<ItemFold> {
        let decimals = self.currency.decimals;
        let invoice_has_tax = self.has_tax();
        let invoice_has_discount = self.has_discount();

        let seed = ItemFold {
            computed: Vec::with_capacity(self.items.len()),
            ..ItemFold::default()
        };

        let fold = self.items.iter().try_fold(seed, |mut acc, item| {
            validation::check_adjustment_gates(item, invoice_has_tax, invoice_has_discount)?;

            let totals = item.compute(decimals)?;

            acc.has_item_units |= item.has_units();

            if item.has_discount() {
                let discount = totals.discount.unwrap_or_default();
                let sum = acc.total_discount.unwrap_or_default();
                acc.total_discount = Some(pricing::checked_sum(sum, discount, "discount")?);
                acc.has_item_discount = true;
            }

            if item.has_tax() {
                let tax = totals.tax.unwrap_or_default();
                let sum = acc.total_taxes.unwrap_or_default();
                acc.total_taxes = Some(pricing::checked_sum(sum, tax, "tax")?);
                acc.has_item_tax = true;
            }

            acc.total_amount =
                pricing::checked_sum(acc.total_amount, totals.sub_total_price, "sub-total")?;
            acc.computed.push(totals);

            Ok::<_, CoreError>(acc)
        })?;

        debug!(
            items = self.items.len(),
            sub_total = %fold.total_amount,
            "Items folded"
        );

        Ok(fold)
    }

    /// Applies invoice-level overrides on top of the item fold.
    ///
    /// An explicit taxable amount means the taxes were worked out by the
    /// caller: the tax stage is skipped and the tax override is reported
    /// as given.
    fn resolve(&self, fold: &ItemFold) -> CoreResult<InvoiceTotals> {
        let decimals = self.currency.decimals;

        let table_columns = self.table_columns
            + usize::from(fold.has_item_units)
            + usize::from(fold.has_item_discount)
            + usize::from(fold.has_item_tax);

        let mut total_amount = self.total_amount.unwrap_or(fold.total_amount);

        let total_discount = match &self.discount {
            Some(discount) => {
                let before = total_amount;
                total_amount = discount.apply_discount(before, decimals)?;
                debug!(before = %before, after = %total_amount, "Invoice discount applied");
                Some(pricing::checked_difference(before, total_amount, "discount")?)
            }
            None => fold.total_discount,
        };

        let (total_taxes, taxable_amount) = match (&self.tax, self.taxable_amount) {
            (Some(tax), None) => {
                let taxable = total_amount;
                let taxed = tax.apply_tax(taxable, decimals)?;
                let tax_amount = pricing::checked_difference(taxed, taxable, "tax")?;
                total_amount = pricing::apply_tax(total_amount, tax_amount, decimals, false)?;
                debug!(taxable = %taxable, tax = %tax_amount, "Invoice tax applied");
                (Some(tax_amount), Some(taxable))
            }
            (Some(tax), Some(taxable)) => {
                debug!(taxable = %taxable, tax = %tax.amount, "Invoice tax taken as given");
                (Some(tax.amount), Some(taxable))
            }
            (None, taxable) => (fold.total_taxes, taxable),
        };

        if let Some(shipping) = self.shipping_amount {
            let shipped = pricing::checked_sum(total_amount, shipping, "shipping")?;
            total_amount = pricing::round(shipped, decimals);
            debug!(shipping = %shipping, "Shipping applied");
        }

        Ok(InvoiceTotals {
            total_amount,
            total_discount,
            total_taxes,
            taxable_amount,
            shipping_amount: self.shipping_amount,
            has_item_units: fold.has_item_units,
            has_item_discount: fold.has_item_discount,
            has_item_tax: fold.has_item_tax,
            table_columns,
        })
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Read-only view of the prepared invoice.
    pub fn snapshot(&self) -> CoreResult<InvoiceSnapshot> {
        let totals = self.totals.as_ref().ok_or(CoreError::NotCalculated)?;
        let buyer = self.buyer.as_deref().ok_or(CoreError::MissingBuyer)?;

        let items = self
            .items
            .iter()
            .map(|item| {
                let computed = match item.totals() {
                    Some(totals) => *totals,
                    None => item.compute(self.currency.decimals)?,
                };
                Ok(ItemSnapshot {
                    title: item.get_title().to_string(),
                    description: item.get_description().map(str::to_string),
                    units: item.get_units().map(str::to_string),
                    quantity: item.get_quantity(),
                    price_per_unit: item.get_price_per_unit(),
                    discount_adjustment: item.discount_adjustment().copied(),
                    tax_adjustment: item.tax_adjustment().copied(),
                    discount: computed.discount,
                    tax: computed.tax,
                    sub_total_price: computed.sub_total_price,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(InvoiceSnapshot {
            name: self.name.clone(),
            serial_number: self.serial_number(),
            status: self.status.clone(),
            date: self.formatted_date()?,
            pay_until_date: self.formatted_pay_until_date()?,
            template: self.template.clone(),
            filename: self.filename(),
            notes: self.notes.clone(),
            logo: self.logo.clone(),
            payment: self.payment.clone(),
            bank: self.bank.clone(),
            swift: self.swift.clone(),
            course: self.course.clone(),
            course_date: self.course_date.clone(),
            currency_code: self.currency.code.clone(),
            currency_symbol: self.currency.symbol.clone(),
            currency_decimals: self.currency.decimals,
            seller: self.seller.as_deref().map(PartySnapshot::from_party),
            buyer: PartySnapshot::from_party(buyer),
            items,
            total_amount: totals.total_amount,
            total_discount: totals.total_discount,
            discount_percentage: self.discount.and_then(|d| d.rate()),
            total_taxes: totals.total_taxes,
            tax_rate: self.tax.and_then(|t| t.rate()),
            taxable_amount: totals.taxable_amount,
            shipping_amount: totals.shipping_amount,
            total_amount_formatted: self.format_currency(totals.total_amount),
            has_item_units: totals.has_item_units,
            has_item_discount: totals.has_item_discount,
            has_item_tax: totals.has_item_tax,
            table_columns: totals.table_columns,
            custom_data: self.custom_data.clone(),
        })
    }

    /// Prepares the invoice and hands its snapshot to `renderer`.
    pub fn render<R: Renderer>(&mut self, renderer: &R) -> CoreResult<R::Output> {
        self.prepare()?;
        let snapshot = self.snapshot()?;
        renderer.render(&snapshot)
    }

    /// Like [`render`](Self::render), with the logo embedded as a data URI.
    pub fn render_with_logo<R: Renderer>(
        &mut self,
        renderer: &R,
        logos: &dyn LogoSource,
    ) -> CoreResult<R::Output> {
        self.prepare()?;
        let mut snapshot = self.snapshot()?;
        if let Some(data_uri) = self.logo_data_uri(logos)? {
            snapshot.logo = Some(data_uri);
        }
        renderer.render(&snapshot)
    }
}

fn format_date(date: NaiveDate, pattern: &str) -> CoreResult<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).map_err(|_| ValidationError::InvalidFormat {
        field: "date_format".to_string(),
        reason: format!("'{}' is not a valid strftime pattern", pattern),
    })?;
    Ok(out)
}

/// Integer part of a non-negative amount.
fn whole_units(amount: Decimal) -> u128 {
    amount.trunc().mantissa().unsigned_abs()
}

fn capitalize(words: &str) -> String {
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower snake case: "Monthly Invoice" and "MonthlyInvoice" both become
/// "monthly_invoice". All-lowercase input is returned unchanged.
fn snake_case(value: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_lowercase()) {
        return value.to_string();
    }

    let mut studly = String::with_capacity(value.len());
    for word in value.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            studly.extend(first.to_uppercase());
            studly.push_str(chars.as_str());
        }
    }

    let mut snake = String::with_capacity(studly.len() + 4);
    for (i, c) in studly.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            snake.push('_');
        }
        snake.extend(c.to_lowercase());
    }
    snake
}

// =============================================================================
// Builder
// =============================================================================

/// Chained configuration of an [`Invoice`].
///
/// ```rust
/// use invoicer_core::{Contact, InvoiceBuilder, LineItem};
/// use rust_decimal::Decimal;
///
/// let invoice = InvoiceBuilder::new("Invoice")
///     .buyer(Contact::new("ACME Ltd."))
///     .discount_by_percent(Decimal::new(10, 0))?
///     .add_item(LineItem::new("Consulting").price_per_unit(Decimal::new(200, 0)))
///     .build();
/// assert!(invoice.has_discount());
/// # Ok::<(), invoicer_core::CoreError>(())
/// ```
#[derive(Debug)]
pub struct InvoiceBuilder {
    invoice: Invoice,
}

impl InvoiceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        InvoiceBuilder {
            invoice: Invoice::new(name.into()),
        }
    }

    pub fn build(self) -> Invoice {
        self.invoice
    }

    // -------------------------------------------------------------------------
    // Document fields
    // -------------------------------------------------------------------------

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.invoice.name = name.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.invoice.notes = Some(notes.into());
        self
    }

    /// Path of the logo image; read only when a logo data URI is requested.
    pub fn logo(mut self, path: impl Into<String>) -> Self {
        self.invoice.logo = Some(path.into());
        self
    }

    pub fn payment(mut self, payment: impl Into<String>) -> Self {
        self.invoice.payment = Some(payment.into());
        self
    }

    pub fn bank(mut self, bank: impl Into<String>) -> Self {
        self.invoice.bank = Some(bank.into());
        self
    }

    pub fn swift(mut self, swift: impl Into<String>) -> Self {
        self.invoice.swift = Some(swift.into());
        self
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.invoice.course = Some(course.into());
        self
    }

    pub fn course_date(mut self, course_date: impl Into<String>) -> Self {
        self.invoice.course_date = Some(course_date.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.invoice.status = Some(status.into());
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.invoice.template = template.into();
        self
    }

    /// Sets the filename; the document extension is appended.
    pub fn filename(mut self, filename: impl AsRef<str>) -> Self {
        self.invoice.filename = Some(format!("{}.{}", filename.as_ref(), DOCUMENT_EXTENSION));
        self
    }

    /// Attaches an opaque payload for templates.
    pub fn custom_data(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.invoice.custom_data = Some(value.into());
        self
    }

    /// Base column count before optional item columns are added.
    pub fn table_columns(mut self, columns: usize) -> Self {
        self.invoice.table_columns = columns;
        self
    }

    // -------------------------------------------------------------------------
    // Currency
    // -------------------------------------------------------------------------

    pub fn currency(mut self, currency: Currency) -> Self {
        self.invoice.currency = currency;
        self
    }

    pub fn currency_code(mut self, code: impl Into<String>) -> Self {
        self.invoice.currency.code = code.into();
        self
    }

    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.invoice.currency.symbol = symbol.into();
        self
    }

    pub fn currency_fraction(mut self, fraction: impl Into<String>) -> Self {
        self.invoice.currency.fraction = fraction.into();
        self
    }

    /// Precision every calculation stage rounds to.
    pub fn currency_decimals(mut self, decimals: u32) -> Self {
        self.invoice.currency.decimals = decimals;
        self
    }

    pub fn currency_format(mut self, format: impl Into<String>) -> Self {
        self.invoice.currency.format = format.into();
        self
    }

    pub fn currency_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.invoice.currency.thousands_separator = separator.into();
        self
    }

    pub fn currency_decimal_point(mut self, point: impl Into<String>) -> Self {
        self.invoice.currency.decimal_point = point.into();
        self
    }

    // -------------------------------------------------------------------------
    // Serial number and dates
    // -------------------------------------------------------------------------

    pub fn serial_number(mut self, serial: SerialNumber) -> Self {
        self.invoice.serial = serial;
        self
    }

    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.invoice.serial.series = series.into();
        self
    }

    pub fn sequence(mut self, sequence: u64) -> Self {
        self.invoice.serial.sequence = sequence;
        self
    }

    pub fn sequence_padding(mut self, padding: usize) -> Self {
        self.invoice.serial.sequence_padding = padding;
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.invoice.serial.delimiter = delimiter.into();
        self
    }

    pub fn serial_number_format(mut self, format: impl Into<String>) -> Self {
        self.invoice.serial.format = format.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.invoice.date = date;
        self
    }

    /// strftime pattern used for rendered dates.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.invoice.date_format = format.into();
        self
    }

    pub fn pay_until_days(mut self, days: u32) -> Self {
        self.invoice.pay_until_days = days;
        self
    }

    // -------------------------------------------------------------------------
    // Parties and items
    // -------------------------------------------------------------------------

    pub fn seller(mut self, party: impl Party + 'static) -> Self {
        self.invoice.seller = Some(Box::new(party));
        self
    }

    pub fn buyer(mut self, party: impl Party + 'static) -> Self {
        self.invoice.buyer = Some(Box::new(party));
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.invoice.items.push(item);
        self
    }

    pub fn add_items(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.invoice.items.extend(items);
        self
    }

    // -------------------------------------------------------------------------
    // Monetary overrides
    // -------------------------------------------------------------------------

    /// Sets the invoice tax, as an amount or as a percentage.
    ///
    /// Fails with `DuplicateOverride` if any tax override was already set.
    pub fn total_taxes(mut self, amount: Decimal, by_percent: bool) -> CoreResult<Self> {
        set_once(
            &mut self.invoice.tax,
            Adjustment::new(amount, by_percent),
            AdjustmentOwner::Invoice,
            AdjustmentTarget::Tax,
        )?;
        Ok(self)
    }

    /// Sets the invoice tax as a percentage.
    pub fn tax_rate(self, percent: Decimal) -> CoreResult<Self> {
        self.total_taxes(percent, true)
    }

    /// Sets the invoice discount, as an amount or as a percentage.
    ///
    /// Fails with `DuplicateOverride` if any discount override was already set.
    pub fn total_discount(mut self, amount: Decimal, by_percent: bool) -> CoreResult<Self> {
        set_once(
            &mut self.invoice.discount,
            Adjustment::new(amount, by_percent),
            AdjustmentOwner::Invoice,
            AdjustmentTarget::Discount,
        )?;
        Ok(self)
    }

    /// Sets the invoice discount as a percentage.
    pub fn discount_by_percent(self, percent: Decimal) -> CoreResult<Self> {
        self.total_discount(percent, true)
    }

    /// Taxable base worked out by the caller. The invoice tax stage is then
    /// skipped and the tax override is reported as given.
    pub fn taxable_amount(mut self, amount: Decimal) -> Self {
        self.invoice.taxable_amount = Some(amount);
        self
    }

    pub fn shipping(mut self, amount: Decimal) -> Self {
        self.invoice.shipping_amount = Some(amount);
        self
    }

    /// Overrides the sum of item sub-totals.
    pub fn total_amount(mut self, amount: Decimal) -> Self {
        self.invoice.total_amount = Some(amount);
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
