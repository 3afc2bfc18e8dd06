//! # Validation Module
//!
//! Business rule validation for Invoicer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Builder setters                                              │
//! │  └── Duplicate override detection (tax/discount set twice)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Invoice::prepare  ← THIS MODULE                              │
//! │  ├── Buyer present                                                     │
//! │  ├── Every item has a title                                            │
//! │  └── Item vs invoice adjustment gates                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Configuration loading (invoicer-render)                      │
//! │  └── Currency decimals, date format, template                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use invoicer_core::validation::{validate_currency_decimals, validate_item_title};
//!
//! assert!(validate_item_title("Consulting").is_ok());
//! assert!(validate_currency_decimals(2).is_ok());
//! assert!(validate_currency_decimals(40).is_err());
//! ```

use chrono::format::{Item, StrftimeItems};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::item::LineItem;
use crate::types::AdjustmentTarget;
use crate::MAX_CURRENCY_DECIMALS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a line item title.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_item_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a template identifier.
pub fn validate_template(template: &str) -> ValidationResult<()> {
    if template.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "template".to_string(),
        });
    }

    Ok(())
}

/// Validates a strftime date pattern.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain unknown `%` specifiers
pub fn validate_date_format(format: &str) -> ValidationResult<()> {
    if format.is_empty() {
        return Err(ValidationError::Required {
            field: "date_format".to_string(),
        });
    }

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ValidationError::InvalidFormat {
            field: "date_format".to_string(),
            reason: format!("'{}' is not a valid strftime pattern", format),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the number of currency decimals.
pub fn validate_currency_decimals(decimals: u32) -> ValidationResult<()> {
    if decimals > MAX_CURRENCY_DECIMALS {
        return Err(ValidationError::OutOfRange {
            field: "currency_decimals".to_string(),
            min: 0,
            max: MAX_CURRENCY_DECIMALS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Adjustment Gates
// =============================================================================

/// Checks that `item` does not carry an adjustment the invoice also carries.
///
/// ## Rules
/// ```text
/// item tax      + invoice tax      → ConflictingAdjustment { Tax }
/// item discount + invoice discount → ConflictingAdjustment { Discount }
/// ```
/// Tax is checked before discount.
pub fn check_adjustment_gates(
    item: &LineItem,
    invoice_has_tax: bool,
    invoice_has_discount: bool,
) -> CoreResult<()> {
    if item.has_tax() && invoice_has_tax {
        return Err(CoreError::ConflictingAdjustment {
            adjustment: AdjustmentTarget::Tax,
        });
    }

    if item.has_discount() && invoice_has_discount {
        return Err(CoreError::ConflictingAdjustment {
            adjustment: AdjustmentTarget::Discount,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
