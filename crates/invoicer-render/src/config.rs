//! # Invoice Configuration
//!
//! Defaults applied to every invoice built by this layer.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     INVOICER_CURRENCY_CODE=usd                                         │
//! │     INVOICER_SERIES=BIG                                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/invoicer/invoices.toml (Linux)                           │
//! │     ~/Library/Application Support/com.invoicer.invoicer/invoices.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     eur, AA.00001, %Y-%m-%d, pay within 7 days                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # invoices.toml
//! [date]
//! format = "%d/%m/%Y"
//! pay_until_days = 14
//!
//! [serial_number]
//! series = "BIG"
//! sequence = 667
//! sequence_padding = 5
//! delimiter = "."
//! format = "{SERIES}{DELIMITER}{SEQUENCE}"
//!
//! [currency]
//! code = "usd"
//! fraction = "ct."
//! symbol = "$"
//! decimals = 2
//! decimal_point = "."
//! thousands_separator = ","
//! format = "{SYMBOL}{VALUE}"
//!
//! [render]
//! template = "default"
//! table_columns = 4
//! ```

use std::path::PathBuf;

use invoicer_core::validation;
use invoicer_core::{Currency, InvoiceBuilder, SerialNumber};
use invoicer_core::{
    BASE_TABLE_COLUMNS, DEFAULT_DATE_FORMAT, DEFAULT_PAY_UNTIL_DAYS, DEFAULT_TEMPLATE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{RenderError, RenderResult};

/// File name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "invoices.toml";

// =============================================================================
// Date Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSettings {
    /// strftime pattern for rendered dates.
    #[serde(default = "default_date_format")]
    pub format: String,

    /// Days between the invoice date and the payment deadline.
    #[serde(default = "default_pay_until_days")]
    pub pay_until_days: u32,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_pay_until_days() -> u32 {
    DEFAULT_PAY_UNTIL_DAYS
}

impl Default for DateSettings {
    fn default() -> Self {
        DateSettings {
            format: default_date_format(),
            pay_until_days: default_pay_until_days(),
        }
    }
}

// =============================================================================
// Render Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Template name handed through to the renderer.
    #[serde(default = "default_template")]
    pub template: String,

    /// Base item table columns before optional ones are added.
    #[serde(default = "default_table_columns")]
    pub table_columns: usize,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_table_columns() -> usize {
    BASE_TABLE_COLUMNS
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            template: default_template(),
            table_columns: default_table_columns(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete invoice configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceConfig {
    #[serde(default)]
    pub date: DateSettings,

    #[serde(default)]
    pub serial_number: SerialNumber,

    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub render: RenderSettings,
}

impl InvoiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (invoices.toml)
    /// 3. Environment variables
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load(config_path: Option<PathBuf>) -> RenderResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with overrides read through `lookup` instead of
    /// the process environment.
    pub fn load_with(
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> RenderResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading invoice config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides_from(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load invoice config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> RenderResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration as pretty TOML, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> RenderResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| RenderError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Invoice config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> RenderResult<()> {
        let invalid = |e: invoicer_core::ValidationError| RenderError::InvalidConfig(e.to_string());

        validation::validate_currency_decimals(self.currency.decimals).map_err(invalid)?;
        validation::validate_date_format(&self.date.format).map_err(invalid)?;
        validation::validate_template(&self.render.template).map_err(invalid)?;

        if self.currency.code.trim().is_empty() {
            return Err(RenderError::InvalidConfig(
                "currency.code must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Unparseable numeric values are logged and ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(code) = lookup("INVOICER_CURRENCY_CODE") {
            debug!(code = %code, "Overriding currency code from environment");
            self.currency.code = code;
        }

        if let Some(symbol) = lookup("INVOICER_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }

        if let Some(decimals) = lookup("INVOICER_CURRENCY_DECIMALS") {
            match decimals.parse::<u32>() {
                Ok(d) => {
                    debug!(decimals = d, "Overriding currency decimals from environment");
                    self.currency.decimals = d;
                }
                Err(_) => warn!(value = %decimals, "Ignoring invalid INVOICER_CURRENCY_DECIMALS"),
            }
        }

        if let Some(series) = lookup("INVOICER_SERIES") {
            debug!(series = %series, "Overriding serial series from environment");
            self.serial_number.series = series;
        }

        if let Some(template) = lookup("INVOICER_TEMPLATE") {
            self.render.template = template;
        }

        if let Some(days) = lookup("INVOICER_PAY_UNTIL_DAYS") {
            match days.parse::<u32>() {
                Ok(d) => self.date.pay_until_days = d,
                Err(_) => warn!(value = %days, "Ignoring invalid INVOICER_PAY_UNTIL_DAYS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "invoicer", "invoicer")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Application
    // =========================================================================

    /// Seeds a builder with the configured defaults.
    ///
    /// Call before invoice-specific setters so those take precedence.
    pub fn apply(&self, builder: InvoiceBuilder) -> InvoiceBuilder {
        builder
            .currency(self.currency.clone())
            .serial_number(self.serial_number.clone())
            .date_format(self.date.format.clone())
            .pay_until_days(self.date.pay_until_days)
            .template(self.render.template.clone())
            .table_columns(self.render.table_columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = InvoiceConfig::default();
        assert_eq!(config.currency.code, "eur");
        assert_eq!(config.currency.decimals, 2);
        assert_eq!(config.serial_number.series, "AA");
        assert_eq!(config.date.pay_until_days, 7);
        assert_eq!(config.render.table_columns, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = InvoiceConfig::from_toml(
            r#"
            [currency]
            code = "usd"
            symbol = "$"

            [serial_number]
            series = "BIG"
            "#,
        )
        .unwrap();

        assert_eq!(config.currency.code, "usd");
        assert_eq!(config.currency.fraction, "ct.");
        assert_eq!(config.serial_number.series, "BIG");
        assert_eq!(config.serial_number.sequence_padding, 5);
        assert_eq!(config.date, DateSettings::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = InvoiceConfig::default();

        config.currency.decimals = 11;
        assert!(matches!(config.validate(), Err(RenderError::InvalidConfig(_))));

        config.currency.decimals = 3;
        config.date.format = String::new();
        assert!(config.validate().is_err());

        config.date.format = "%d.%m.%Y".into();
        config.render.template = "  ".into();
        assert!(config.validate().is_err());

        config.render.template = "classic".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("INVOICER_CURRENCY_CODE", "usd"),
            ("INVOICER_CURRENCY_DECIMALS", "3"),
            ("INVOICER_SERIES", "ENV"),
            ("INVOICER_PAY_UNTIL_DAYS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = InvoiceConfig::default();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.currency.code, "usd");
        assert_eq!(config.currency.decimals, 3);
        assert_eq!(config.serial_number.series, "ENV");
        assert_eq!(config.date.pay_until_days, 7);
        assert_eq!(config.render.template, "default");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = InvoiceConfig::default();
        config.currency.thousands_separator = ",".into();
        config.serial_number.sequence = 42;
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[currency]"));
        assert!(contents.contains("[serial_number]"));

        let loaded = InvoiceConfig::from_toml(&contents).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = InvoiceConfig::load_with(Some(dir.path().join("absent.toml")), |_| None)
            .unwrap();
        assert_eq!(config, InvoiceConfig::default());
    }

    #[test]
    fn test_load_layers_file_then_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[serial_number]\nseries = \"FILE\"\n\n[currency]\ncode = \"gbp\"\n")
            .unwrap();

        let config = InvoiceConfig::load_with(Some(path), |key| {
            (key == "INVOICER_SERIES").then(|| "ENV".to_string())
        })
        .unwrap();

        assert_eq!(config.serial_number.series, "ENV");
        assert_eq!(config.currency.code, "gbp");
        assert_eq!(config.render.template, "default");
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let dir = tempfile::tempdir().unwrap();
        let result = InvoiceConfig::load_with(Some(dir.path().join("absent.toml")), |key| {
            (key == "INVOICER_CURRENCY_CODE").then(|| " ".to_string())
        });
        assert!(matches!(result, Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn test_apply_seeds_builder() {
        let mut config = InvoiceConfig::default();
        config.serial_number.series = "CFG".into();
        config.currency.symbol = "$".into();

        let invoice = config
            .apply(InvoiceBuilder::new("Invoice"))
            .sequence(9)
            .build();

        assert_eq!(invoice.serial_number(), "CFG.00009");
        assert_eq!(invoice.currency().symbol, "$");
    }
}
