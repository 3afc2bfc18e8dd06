//! End-to-end calculation scenarios through the public API only.

use invoicer_core::{
    AdjustmentTarget, Contact, CoreError, CoreResult, Currency, InvoiceBuilder, InvoiceSnapshot,
    LineItem, Renderer, BASE_TABLE_COLUMNS,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn customer() -> Contact {
    Contact::new("Ashley Medina")
        .address("Sherwood Forest 13")
        .phone("+1 555 0100")
        .custom_field("order number", "> 654321 <")
}

fn seller() -> Contact {
    Contact::new("Invoicer Ltd.")
        .code("000-000")
        .vat("LT123456789")
}

#[test]
fn override_discount_tax_and_shipping_in_order() {
    let mut invoice = InvoiceBuilder::new("Invoice")
        .buyer(customer())
        .total_amount(dec!(200))
        .discount_by_percent(dec!(10))
        .unwrap()
        .tax_rate(dec!(10))
        .unwrap()
        .shipping(dec!(5))
        .build();

    let totals = *invoice.prepare().unwrap();

    assert_eq!(totals.total_discount, Some(dec!(20.00)));
    assert_eq!(totals.taxable_amount, Some(dec!(180.00)));
    assert_eq!(totals.total_taxes, Some(dec!(18.00)));
    assert_eq!(totals.total_amount, dec!(203.00));
}

#[test]
fn items_drive_totals_without_overrides() {
    let items = vec![
        LineItem::new("Service 1")
            .description("Your product or service description")
            .price_per_unit(dec!(47.79))
            .quantity(dec!(2))
            .discount(dec!(10), false)
            .unwrap(),
        LineItem::new("Service 2").price_per_unit(dec!(71.96)).quantity(dec!(2)),
        LineItem::new("Service 3").price_per_unit(dec!(4.56)),
        LineItem::new("Service 4")
            .price_per_unit(dec!(87.51))
            .quantity(dec!(7))
            .discount(dec!(4), false)
            .unwrap()
            .units("kg"),
    ];

    let mut invoice = InvoiceBuilder::new("Receipt")
        .seller(seller())
        .buyer(customer())
        .add_items(items)
        .build();

    let totals = *invoice.prepare().unwrap();

    // 85.58 + 143.92 + 4.56 + 608.57
    assert_eq!(totals.total_amount, dec!(842.63));
    assert_eq!(totals.total_discount, Some(dec!(14.00)));
    assert_eq!(totals.total_taxes, None);
    assert_eq!(totals.table_columns, BASE_TABLE_COLUMNS + 2);
    assert!(invoice.has_item_or_invoice_discount());
    assert!(!invoice.has_item_or_invoice_tax());
}

#[test]
fn conflicting_item_tax_is_reported_and_nothing_changes() {
    let mut invoice = InvoiceBuilder::new("Invoice")
        .buyer(customer())
        .total_taxes(dec!(10), false)
        .unwrap()
        .add_item(LineItem::new("Fine").price_per_unit(dec!(10)))
        .add_item(
            LineItem::new("Taxed")
                .price_per_unit(dec!(10))
                .tax(dec!(1), false)
                .unwrap(),
        )
        .build();

    let err = invoice.prepare().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invoice: you must have taxes only on items or only on invoice"
    );
    assert!(matches!(
        err,
        CoreError::ConflictingAdjustment {
            adjustment: AdjustmentTarget::Tax
        }
    ));
    assert!(invoice.totals().is_none());
    assert!(invoice.items().iter().all(|item| item.totals().is_none()));

    // The invoice stays usable for inspection
    assert_eq!(invoice.items().len(), 2);
}

#[test]
fn duplicate_item_adjustment_is_rejected() {
    let err = LineItem::new("Service")
        .discount(dec!(1), false)
        .unwrap()
        .discount_by_percent(dec!(5))
        .unwrap_err();

    assert_eq!(err.to_string(), "InvoiceItem: unable to set discount twice");
}

#[test]
fn explicit_item_sub_total_is_taken_as_given() {
    let mut invoice = InvoiceBuilder::new("Invoice")
        .buyer(customer())
        .add_item(
            LineItem::new("Bundle")
                .price_per_unit(dec!(999))
                .quantity(dec!(3))
                .sub_total_price(dec!(100))
                .tax(dec!(21), false)
                .unwrap(),
        )
        .build();

    let totals = *invoice.prepare().unwrap();
    assert_eq!(totals.total_amount, dec!(100));
    assert_eq!(totals.total_taxes, Some(dec!(21)));
    assert!(totals.has_item_tax);
}

#[test]
fn explicit_taxable_amount_skips_tax_stage() {
    let mut invoice = InvoiceBuilder::new("Invoice")
        .buyer(customer())
        .add_item(LineItem::new("Goods").price_per_unit(dec!(100)))
        .add_item(LineItem::new("Deposit").price_per_unit(dec!(20)))
        .taxable_amount(dec!(100))
        .total_taxes(dec!(10), false)
        .unwrap()
        .build();

    let totals = *invoice.prepare().unwrap();

    assert_eq!(totals.total_amount, dec!(120));
    assert_eq!(totals.total_taxes, Some(dec!(10)));
    assert_eq!(totals.taxable_amount, Some(dec!(100)));
}

#[test]
fn overflowing_amount_is_an_error_not_a_panic() {
    let mut invoice = InvoiceBuilder::new("Invoice")
        .buyer(customer())
        .add_item(LineItem::new("Huge").price_per_unit(Decimal::MAX).quantity(dec!(2)))
        .build();

    let err = invoice.prepare().unwrap_err();

    assert_eq!(err.to_string(), "Amount overflow while applying quantity");
    assert!(invoice.totals().is_none());
    assert!(invoice.items()[0].totals().is_none());
}

#[test]
fn currency_precision_applies_to_every_stage() {
    let currency = Currency {
        code: "bhd".into(),
        symbol: "BD".into(),
        decimals: 3,
        format: "{SYMBOL} {VALUE}".into(),
        ..Currency::default()
    };

    let mut invoice = InvoiceBuilder::new("Invoice")
        .buyer(customer())
        .currency(currency)
        .add_item(LineItem::new("Item").price_per_unit(dec!(1.2345)).quantity(dec!(3)))
        .discount_by_percent(dec!(7.5))
        .unwrap()
        .build();

    let totals = *invoice.prepare().unwrap();
    // 3.7035 → 3.704 (half away from zero), × 0.925 = 3.4262 → 3.426
    assert_eq!(totals.total_amount, dec!(3.426));
    assert_eq!(totals.total_discount, Some(dec!(0.278)));
    assert_eq!(invoice.format_currency(totals.total_amount), "BD 3.426");
}

#[test]
fn prepare_runs_once() {
    let mut invoice = InvoiceBuilder::new("Invoice")
        .buyer(customer())
        .add_item(LineItem::new("A").price_per_unit(dec!(10)))
        .shipping(dec!(1))
        .build();

    assert_eq!(invoice.prepare().unwrap().total_amount, dec!(11.00));
    assert!(matches!(invoice.prepare(), Err(CoreError::AlreadyCalculated)));
    assert_eq!(invoice.total_amount(), Some(dec!(11.00)));
}

#[test]
fn empty_invoice_totals_zero() {
    let mut invoice = InvoiceBuilder::new("Invoice").buyer(customer()).build();

    let totals = *invoice.prepare().unwrap();
    assert_eq!(totals.total_amount, Decimal::ZERO);
    assert_eq!(totals.table_columns, BASE_TABLE_COLUMNS);
}

struct JsonText;

impl Renderer for JsonText {
    type Output = serde_json::Value;

    fn render(&self, snapshot: &InvoiceSnapshot) -> CoreResult<Self::Output> {
        serde_json::to_value(snapshot).map_err(|e| CoreError::Render(e.to_string()))
    }
}

#[test]
fn snapshot_carries_resolved_values() {
    let mut invoice = InvoiceBuilder::new("Invoice")
        .seller(seller())
        .buyer(customer())
        .series("BIG")
        .sequence(667)
        .add_item(
            LineItem::new("Service")
                .price_per_unit(dec!(100))
                .tax_by_percent(dec!(21))
                .unwrap(),
        )
        .custom_data(serde_json::json!({ "po": "PO-7" }))
        .build();

    let value = invoice.render(&JsonText).unwrap();

    assert_eq!(value["serial_number"], "BIG.00667");
    assert_eq!(value["filename"], "invoice_BIG_667.pdf");
    assert_eq!(value["total_amount"], "121.00");
    assert_eq!(value["total_taxes"], "21.00");
    assert_eq!(value["items"][0]["tax_adjustment"]["kind"], "percent");
    assert_eq!(value["buyer"]["custom_fields"]["order number"], "> 654321 <");
    assert_eq!(value["seller"]["vat"], "LT123456789");
    assert_eq!(value["custom_data"]["po"], "PO-7");
    assert_eq!(value["has_item_tax"], true);
    assert_eq!(value["table_columns"], 5);
}

#[test]
fn staged_rounding_matches_unrounded_reference() {
    let mut invoice = InvoiceBuilder::new("Invoice")
        .buyer(customer())
        .add_item(LineItem::new("Widget").price_per_unit(dec!(33.333)).quantity(dec!(3)))
        .discount_by_percent(dec!(7))
        .unwrap()
        .tax_rate(dec!(19))
        .unwrap()
        .shipping(dec!(4.99))
        .build();

    let totals = *invoice.prepare().unwrap();

    // Stages: 99.999 → 100.00 → 93.00 → 110.67 → 115.66
    let reference = dec!(33.333) * dec!(3) * dec!(0.93) * dec!(1.19) + dec!(4.99);
    assert_eq!(
        totals.total_amount,
        reference.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    );
    assert_eq!(totals.total_amount, dec!(115.66));
}
