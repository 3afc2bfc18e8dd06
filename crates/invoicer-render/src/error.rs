//! # Render Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Render Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │      I/O        │  │     Invoice             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Io             │  │  Core (calculation,     │ │
//! │  │  ConfigLoad     │  │  Json           │  │  validation, render)    │ │
//! │  │  ConfigSave     │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use invoicer_core::CoreError;
use thiserror::Error;

/// Result type alias for the render layer.
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// A config value failed validation.
    #[error("Invalid invoice configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // I/O Errors
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // =========================================================================
    // Invoice Errors
    // =========================================================================
    /// Calculation, validation or rendering failed in the core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<toml::de::Error> for RenderError {
    fn from(err: toml::de::Error) -> Self {
        RenderError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for RenderError {
    fn from(err: toml::ser::Error) -> Self {
        RenderError::ConfigSaveFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicer_core::AdjustmentTarget;

    #[test]
    fn test_core_errors_are_transparent() {
        let err: RenderError = CoreError::ConflictingAdjustment {
            adjustment: AdjustmentTarget::Discount,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invoice: you must have discounts only on items or only on invoice"
        );
    }

    #[test]
    fn test_toml_errors_map_to_config_load() {
        let err: RenderError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(matches!(err, RenderError::ConfigLoadFailed(_)));
    }
}
