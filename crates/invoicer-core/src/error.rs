//! # Error Types
//!
//! Domain-specific error types for invoicer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  invoicer-core errors (this file)                                      │
//! │  ├── CoreError        - Builder misuse, calculation gates, overflow     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  invoicer-render errors (separate crate)                               │
//! │  └── RenderError      - Config, file and serialization failures        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → RenderError → CLI exit status     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Variants derive `Display` through `thiserror`
//! 2. Include context in error messages (which adjustment, which owner)
//! 3. Errors are enum variants
//! 4. None of these are retried: they describe caller misuse or input
//!    that no amount of retrying can fix

use thiserror::Error;

use crate::types::{AdjustmentOwner, AdjustmentTarget};

// =============================================================================
// Core Error
// =============================================================================

/// Core invoice errors.
///
/// Every variant is fatal to the current calculation. A failed
/// [`Invoice::prepare`](crate::Invoice::prepare) leaves the invoice exactly
/// as it was before the call.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A tax or discount override was set twice on the same owner.
    ///
    /// ## When This Occurs
    /// ```text
    /// InvoiceBuilder::new("x")
    ///     .total_taxes(5, false)?   ← tax override stored
    ///     .tax_rate(10)?            ← DuplicateOverride { Invoice, Tax }
    /// ```
    #[error("{owner}: unable to set {adjustment} twice")]
    DuplicateOverride {
        owner: AdjustmentOwner,
        adjustment: AdjustmentTarget,
    },

    /// Both an item and the invoice carry the same kind of adjustment.
    ///
    /// Taxes (and discounts) must live either on items or on the invoice,
    /// never on both.
    #[error(
        "Invoice: you must have {} only on items or only on invoice",
        .adjustment.plural()
    )]
    ConflictingAdjustment { adjustment: AdjustmentTarget },

    /// Render was attempted without a buyer.
    #[error("Buyer not defined")]
    MissingBuyer,

    /// Totals were already resolved; a second pass would double-apply
    /// invoice-level overrides.
    #[error("Invoice totals have already been calculated")]
    AlreadyCalculated,

    /// A value that only exists after calculation was requested too early.
    #[error("Invoice totals have not been calculated yet")]
    NotCalculated,

    /// An amount left the range `Decimal` can represent.
    ///
    /// `stage` names the calculation step that overflowed, e.g.
    /// `"quantity"` for `price_per_unit × quantity`.
    #[error("Amount overflow while applying {stage}")]
    AmountOverflow { stage: &'static str },

    /// The logo collaborator could not provide the image bytes.
    #[error("Failed to read logo {path}: {source}")]
    Logo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The renderer collaborator failed.
    #[error("Render failed: {0}")]
    Render(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., bad date pattern).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_override_messages() {
        let err = CoreError::DuplicateOverride {
            owner: AdjustmentOwner::Invoice,
            adjustment: AdjustmentTarget::Tax,
        };
        assert_eq!(err.to_string(), "Invoice: unable to set tax twice");

        let err = CoreError::DuplicateOverride {
            owner: AdjustmentOwner::Item,
            adjustment: AdjustmentTarget::Discount,
        };
        assert_eq!(err.to_string(), "InvoiceItem: unable to set discount twice");
    }

    #[test]
    fn test_conflicting_adjustment_messages() {
        let err = CoreError::ConflictingAdjustment {
            adjustment: AdjustmentTarget::Tax,
        };
        assert_eq!(
            err.to_string(),
            "Invoice: you must have taxes only on items or only on invoice"
        );

        let err = CoreError::ConflictingAdjustment {
            adjustment: AdjustmentTarget::Discount,
        };
        assert_eq!(
            err.to_string(),
            "Invoice: you must have discounts only on items or only on invoice"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "title".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: title is required");
    }

    #[test]
    fn test_amount_overflow_names_stage() {
        let err = CoreError::AmountOverflow { stage: "quantity" };
        assert_eq!(err.to_string(), "Amount overflow while applying quantity");
    }
}
